use thiserror::Error;
use crate::rules::rule::{Rule, RuleDef};

// The sixteen core rules of RFC 5234, appendix B.1
// https://tools.ietf.org/html/rfc5234#appendix-B

const NUL: u8 = 0x00;
const DEL: u8 = 0x7F;

// %x41-5A / %x61-7A ; A-Z / a-z
pub const ALPHA: Rule = Rule::new("ALPHA", RuleDef::Ranges(&[b'A'..=b'Z', b'a'..=b'z']));

// "0" / "1"
pub const BIT: Rule = Rule::new("BIT", RuleDef::Bytes(b"01"));

// %x01-7F ; any 7-bit US-ASCII character, excluding NUL
pub const CHAR: Rule = Rule::new("CHAR", RuleDef::Ranges(&[0x01..=DEL]));

// %x0D ; carriage return
pub const CR: Rule = Rule::new("CR", RuleDef::Bytes(b"\r"));

// CR LF ; Internet standard newline
pub const CRLF: Rule = Rule::new("CRLF", RuleDef::Sequences(&[b"\r\n"]));

// %x00-1F / %x7F ; controls
pub const CTL: Rule = Rule::new("CTL", RuleDef::Ranges(&[NUL..=0x1F, DEL..=DEL]));

// %x30-39 ; 0-9
pub const DIGIT: Rule = Rule::new("DIGIT", RuleDef::Ranges(&[b'0'..=b'9']));

// %x22 ; " (double quote)
pub const DQUOTE: Rule = Rule::new("DQUOTE", RuleDef::Bytes(b"\""));

// DIGIT / "A" / "B" / "C" / "D" / "E" / "F" ; uppercase only
pub const HEXDIG: Rule = Rule::new("HEXDIG", RuleDef::Ranges(&[b'0'..=b'9', b'A'..=b'F']));

// %x09 ; horizontal tab
pub const HTAB: Rule = Rule::new("HTAB", RuleDef::Bytes(b"\t"));

// %x0A ; linefeed
pub const LF: Rule = Rule::new("LF", RuleDef::Bytes(b"\n"));

// *(WSP / CRLF WSP) ; linear white space. The unbounded repetition
// cannot be enumerated; these expansions cover zero or one repetition.
pub const LWSP: Rule = Rule::new("LWSP", RuleDef::Sequences(&[b"", b" ", b"\t", b"\r\n ", b"\r\n\t"]));

// %x00-FF ; 8 bits of data
pub const OCTET: Rule = Rule::new("OCTET", RuleDef::Ranges(&[NUL..=0xFF]));

// %x20
pub const SP: Rule = Rule::new("SP", RuleDef::Bytes(b" "));

// %x21-7E ; visible (printing) characters
pub const VCHAR: Rule = Rule::new("VCHAR", RuleDef::Ranges(&[0x21..=0x7E]));

// SP / HTAB ; white space
pub const WSP: Rule = Rule::new("WSP", RuleDef::Bytes(b" \t"));

/// Every core rule, in alphabetical name order.
pub static CORE_RULES: [Rule; 16] = [
    ALPHA, BIT, CHAR, CR, CRLF, CTL, DIGIT, DQUOTE,
    HEXDIG, HTAB, LF, LWSP, OCTET, SP, VCHAR, WSP,
];

#[derive(Debug, Error)]
#[error("'{name}' is not an RFC 5234 core rule")]
pub struct UnknownRuleError {
    name: String,
}

impl UnknownRuleError {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Resolves a core rule by its exact uppercase RFC name.
pub fn lookup(name: &str) -> Result<&'static Rule, UnknownRuleError> {
    CORE_RULES
        .iter()
        .find(|rule| rule.name() == name)
        .ok_or_else(|| UnknownRuleError {
            name: name.to_owned(),
        })
}
