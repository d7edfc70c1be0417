#![allow(dead_code)]

use cmdsig_core::{classify, FlagSet, FlagSpec};

/// Registry with `-d/--debug` (bool) and `--str` (value)
pub fn host_flags() -> FlagSet {
    FlagSet::new()
        .with(FlagSpec::boolean("debug", Some('d')))
        .unwrap()
        .with(FlagSpec::with_value("str", None))
        .unwrap()
}

/// Registry with nothing in it
pub fn no_flags() -> FlagSet {
    FlagSet::new()
}

/// Table row: (name, args, expected signature)
pub type Case = (&'static str, &'static [&'static str], &'static str);

/// Run every case and report all mismatches at once
pub fn assert_cases(flags: &FlagSet, cases: &[Case]) {
    let failures: Vec<String> = cases
        .iter()
        .filter_map(|(name, args, expected)| {
            let got = classify(*args, flags);
            (got != *expected).then(|| {
                format!("{}: {:?} => {:?}, expected {:?}", name, args, got, expected)
            })
        })
        .collect();

    assert!(failures.is_empty(), "\n{}", failures.join("\n"));
}
