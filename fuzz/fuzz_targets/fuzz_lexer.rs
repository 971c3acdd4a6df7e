#![no_main]

use annogen::{SpanLike, TokenKind, tokenize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens = tokenize(s);
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eofs, 1);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));

        for tok in &tokens {
            assert!(tok.span.end() <= s.len());
            assert_eq!(tok.span.len(), tok.text.len());
        }
    }
});
