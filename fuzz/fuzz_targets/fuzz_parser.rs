#![no_main]

use annogen::{GenerationContext, ParseConfig, parse_with_config};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    config: ParseConfig,
    prisma: bool,
    source: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let Ok(generators) = parse_with_config(input.source, input.config) else {
        return;
    };

    let ctx = if input.prisma {
        GenerationContext::from_tag("PRISMA")
    } else {
        GenerationContext::new()
    };
    for generator in &generators {
        let _ = generator.generate(&ctx);
    }
});
