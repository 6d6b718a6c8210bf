//! Parsing of boolean-like indicator cells.

/// Parses an indicator cell as a boolean.
///
/// The cell is trimmed, lower-cased and compared to the literal `"true"`.
/// Everything else is `false`, including absent cells.
///
/// | Cell                                | Result  |
/// |-------------------------------------|---------|
/// | `"true"`, `"True"`, `"TRUE"`        | `true`  |
/// | `" True "` (surrounding whitespace) | `true`  |
/// | `"False"`, `"false"`                | `false` |
/// | `"1"`, `"yes"`, `"t"`               | `false` |
/// | `""`                                | `false` |
/// | absent (`None`)                     | `false` |
///
/// # Example
///
/// ```
/// use vulneval_core::evaluation::parse_flag;
///
/// assert!(parse_flag(Some("TRUE")));
/// assert!(!parse_flag(Some("1")));
/// assert!(!parse_flag(None));
/// ```
pub fn parse_flag(cell: Option<&str>) -> bool {
    cell.map(|raw| raw.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
