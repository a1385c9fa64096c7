use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, PatType, Signature};

/// Rewrites an `fn` item into curried form: the first argument (and the
/// `self` receiver, if any) stays in the signature, every later argument
/// becomes one `move` closure stage. Generics and lifetimes are preserved.
#[proc_macro_attribute]
pub fn curry(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(item as ItemFn);
    match curry_fn(parsed) {
        Ok(tokens) => tokens,
        Err(err) => panic!("{err}"),
    }
    .into()
}

fn curry_fn(item: ItemFn) -> Result<TokenStream2, &'static str> {
    let ItemFn {
        attrs,
        vis,
        sig:
            Signature {
                generics,
                output,
                ident,
                inputs,
                ..
            },
        block,
    } = item;

    let mut args = inputs.into_iter();

    // The receiver never curries; it stays in the outer signature next to
    // the first typed argument.
    let (receiver, head) = match args.next().ok_or(NO_CURRYABLE_ARGUMENT)? {
        FnArg::Receiver(receiver) => (
            Some(receiver),
            typed(args.next().ok_or(NO_CURRYABLE_ARGUMENT)?),
        ),
        FnArg::Typed(arg) => (None, arg),
    };

    let outer_inputs = match receiver {
        Some(receiver) => quote!((#receiver, #head)),
        None => quote!((#head)),
    };

    // One (closure-prefix, Fn-bound) pair per remaining argument.
    let stages: Vec<(TokenStream2, TokenStream2)> = args
        .map(typed)
        .map(|PatType { pat, ty, .. }| (quote!(move |#pat|), quote!(Fn(#ty))))
        .collect();

    let ((first_capture, first_bound), inner) =
        stages.split_first().ok_or(TOO_FEW_ARGUMENTS)?;

    // The outermost stage can stay `impl Fn`, but every inner stage is a
    // closure returned from a closure and has to be boxed. Built from the
    // innermost stage outwards so each wrap nests the previous one.
    let (body, tail) = inner.iter().rfold(
        (quote!(#block), quote!(#output)),
        |(body, tail), (capture, bound)| {
            (
                quote!(Box::new(#capture #body)),
                quote!(-> Box<dyn #bound #tail>),
            )
        },
    );

    Ok(quote! {
        #(#attrs)*
        #vis fn #ident #generics #outer_inputs -> impl #first_bound #tail {
            #first_capture #body
        }
    })
}

fn typed(arg: FnArg) -> PatType {
    match arg {
        FnArg::Typed(arg) => arg,
        FnArg::Receiver(_) => unreachable!("{SECOND_RECEIVER}"),
    }
}

const NO_CURRYABLE_ARGUMENT: &str = "Must have atleast one non `self` argument to curry";
const TOO_FEW_ARGUMENTS: &str = "Cannot curry a function with only 1 argument";
const SECOND_RECEIVER: &str = "Cannot have two or more `self` receivers";

#[cfg(test)]
mod tests {
    use super::*;

    fn test_curry(input: &str, output: &str) {
        let parsed: ItemFn = syn::parse_str(input).unwrap();
        assert_eq!(curry_fn(parsed).unwrap().to_string(), output)
    }

    #[test]
    fn binary_add() {
        test_curry(
            "
                pub fn add(a: i32, b: i32) -> i32 {
                    a + b
                }
            ",
            "pub fn add (a : i32) -> impl Fn (i32) -> i32 { move | b | { a + b } }",
        )
    }

    #[test]
    fn binary_with_receiver() {
        test_curry(
            "
                fn scale(self, factor: f64, bias: f64) -> f64 {
                    self.value * factor + bias
                }
            ",
            "fn scale (self , factor : f64) -> impl Fn (f64) -> f64 { move | bias | { self . value * factor + bias } }",
        )
    }

    #[test]
    fn long_add() {
        test_curry(
            "
                pub fn add(self, a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
                    a + b + c + d + e
                }
            ",
            "pub fn add (self , a : i32) -> impl Fn (i32) -> Box < dyn Fn (i32) -> Box < dyn Fn (i32) -> Box < dyn Fn (i32) -> i32 > > > { move | b | Box :: new (move | c | Box :: new (move | d | Box :: new (move | e | { a + b + c + d + e }))) }"
        )
    }

    #[test]
    fn with_generics() {
        test_curry(
            r#"
                fn generic<T>(x: T, y: T, z: T) {
                    println!("{x}");
                    println!("{y}");
                    println!("{z}");
                }
            "#,
            "fn generic < T > (x : T) -> impl Fn (T) -> Box < dyn Fn (T) > { move | y | Box :: new (move | z | { println ! (\"{x}\") ; println ! (\"{y}\") ; println ! (\"{z}\") ; }) }"
        )
    }

    #[test]
    fn rejects_single_argument() {
        let parsed: ItemFn = syn::parse_str("fn id(x: u8) -> u8 { x }").unwrap();
        assert_eq!(curry_fn(parsed).unwrap_err(), TOO_FEW_ARGUMENTS);
    }

    #[test]
    fn rejects_receiver_only() {
        let parsed: ItemFn = syn::parse_str("fn get(self) -> u8 { self.0 }").unwrap();
        assert_eq!(curry_fn(parsed).unwrap_err(), NO_CURRYABLE_ARGUMENT);
    }
}
