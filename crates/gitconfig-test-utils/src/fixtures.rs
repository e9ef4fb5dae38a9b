//! Sample properties covering every typed reading.

/// Properties whose values exercise integer, list and boolean parsing.
///
/// Listed in ascending name order; `p.e` is deliberately absent.
pub const SAMPLE_PROPERTIES: &[(&str, &str)] = &[
    ("p.a", "-123"),
    ("p.b", "1234"),
    ("p.c", ":b:"),
    ("p.d", "?"),
    ("p.f", "a:b:c"),
    ("p.g", "0"),
    ("p.h", "no"),
    ("p.i", "off"),
    ("p.j", "false"),
    ("p.k", "1"),
    ("p.l", "on"),
    ("p.m", "yes"),
    ("p.n", "true"),
];

/// The canonical rendering of [`SAMPLE_PROPERTIES`].
pub const SAMPLE_RENDERING: &str = "\
p.a=-123
p.b=1234
p.c=:b:
p.d=?
p.f=a:b:c
p.g=0
p.h=no
p.i=off
p.j=false
p.k=1
p.l=on
p.m=yes
p.n=true
";

/// [`SAMPLE_PROPERTIES`] in a scrambled but deterministic order.
pub fn scrambled_sample() -> Vec<(&'static str, &'static str)> {
    let mut scrambled = Vec::with_capacity(SAMPLE_PROPERTIES.len());
    let (mut lo, mut hi) = (0, SAMPLE_PROPERTIES.len());
    // Interleave from both ends: last, first, second-last, second, ...
    while lo < hi {
        hi -= 1;
        scrambled.push(SAMPLE_PROPERTIES[hi]);
        if lo < hi {
            scrambled.push(SAMPLE_PROPERTIES[lo]);
            lo += 1;
        }
    }
    scrambled
}

/// Render `(name, value)` pairs as `git config --list` output.
pub fn listing(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}\n"))
        .collect()
}
