pub mod rule;
pub mod table;

pub use rule::{Rule, RuleDef, Token, Tokens};
pub use table::{
    lookup, UnknownRuleError, CORE_RULES,
    ALPHA, BIT, CHAR, CR, CRLF, CTL, DIGIT, DQUOTE,
    HEXDIG, HTAB, LF, LWSP, OCTET, SP, VCHAR, WSP,
};
