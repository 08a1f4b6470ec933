/// Describes `s` one UTF-16 unit position per line, naming the control
/// characters the host cares about.
///
/// Useful when comparing a snapshot with host readback by eye, since CR, LF,
/// VT and non-breaking spaces are otherwise invisible.
pub fn describe_chars(s: &str) -> String {
    let mut out = format!("{s:?}\n");

    if s.is_empty() {
        out.push_str("string.Empty.");
        return out;
    }

    out.push_str(&format!("Length : {}", s.encode_utf16().count()));

    let mut index = 0;
    for c in s.chars() {
        let code = c as u32;
        let label = match code {
            0x0a => "<LF>".to_string(),
            0x0b => "|VT|".to_string(),
            0x0d => "<CR>".to_string(),
            0x20 => "[SP]".to_string(),
            0x00..=0x1f => "___".to_string(),
            _ => format!("'{c}'"),
        };
        out.push_str(&format!("\ns[{index:02}] = {label} ('\\u{code:04x}')"));
        index += c.len_utf16();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn describes_empty_string() {
        assert_snapshot!(describe_chars(""), @r#"
        ""
        string.Empty.
        "#);
    }

    #[test]
    fn names_breaks_and_spaces() {
        assert_snapshot!(describe_chars("a \r\nほ"), @r#"
        "a \r\nほ"
        Length : 5
        s[00] = 'a' ('\u0061')
        s[01] = [SP] ('\u0020')
        s[02] = <CR> ('\u000d')
        s[03] = <LF> ('\u000a')
        s[04] = 'ほ' ('\u307b')
        "#);
    }

    #[test]
    fn names_vertical_tab_and_other_controls() {
        let dump = describe_chars("\u{b}\u{1}");
        assert!(dump.contains("s[00] = |VT| ('\\u000b')"));
        assert!(dump.contains("s[01] = ___ ('\\u0001')"));
    }

    #[test]
    fn indexes_advance_by_utf16_units() {
        let dump = describe_chars("😀a");
        assert!(dump.contains("Length : 3"));
        assert!(dump.contains("s[02] = 'a'"));
    }
}
