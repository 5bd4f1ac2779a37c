use frontend::{lexer::lexer::tokenize, lexer::tokens::TokenKind, parse_source};
use proptest::prelude::*;

/// Characters the lexer knows about, plus a few it does not.
const ALPHABET: &str = "[a-z0-9_ \n\t(){}<>=!&|.,;:+*/%'\"\\\\#@-]{0,64}";

fn binary_operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "=", "||", "&&", "==", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/", "%",
    ])
}

fn unary_operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["-", "+", "!", "*", "&", "&mut"])
}

fn cast_target() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["u8", "i32", "bool", "*u8", "*mut i16", "_"])
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "v[a-z0-9_]{0,4}",
        "[1-9][0-9]{0,3}",
        Just("0".to_string()),
        Just("true".to_string()),
        Just("'a'".to_string()),
        Just("\"s\\n\"".to_string()),
    ];

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), binary_operator(), inner.clone())
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            (unary_operator(), inner.clone()).prop_map(|(op, operand)| format!("{} {}", op, operand)),
            inner.clone().prop_map(|inner| format!("({})", inner)),
            (inner.clone(), "v[a-z]{0,3}").prop_map(|(receiver, field)| format!("{}.{}", receiver, field)),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(callee, args)| format!("{}({})", callee, args.join(", "))),
            (inner.clone(), cast_target()).prop_map(|(expr, target)| format!("{} as {}", expr, target)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]
    #[test]
    fn never_panics_and_ends_with_one_eof(s in any::<String>()) {
        if let Ok(tokens) = tokenize(s.clone(), None) {
            let eofs = tokens.iter().filter(|token| token.kind == TokenKind::EOF).count();
            prop_assert_eq!(eofs, 1, "input={:?}", s);
            prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
        }
    }

    #[test]
    fn spans_are_monotonic(s in ALPHABET) {
        if let Ok(tokens) = tokenize(s.clone(), None) {
            let mut last_end = 0u32;
            for token in &tokens {
                let start = token.span.start.offset;
                let end = token.span.end.offset;

                prop_assert!(start <= end, "start>end: ({start},{end}) token={:?} input={s:?}", token.kind);
                prop_assert!(start >= last_end, "token moved backwards: {start} < {last_end} input={s:?}");
                prop_assert!(end as usize <= s.len(), "end out of bounds: {end} input={s:?}");
                last_end = end;
            }
        }
    }

    #[test]
    fn printing_is_idempotent(expr in expression()) {
        let source = format!("fn main() {{ {}; }}", expr);
        let first = parse_source(source.clone(), None);
        prop_assert!(first.is_ok(), "source={source:?} error={:?}", first.as_ref().err());

        let printed = first.unwrap().to_string();
        let second = parse_source(printed.clone(), None);
        prop_assert!(second.is_ok(), "printed={printed:?}");
        prop_assert_eq!(second.unwrap().to_string(), printed);
    }
}
