//! The core lexical rules of ABNF (RFC 5234, appendix B) as enumerable
//! byte-character classes, with union and complement derivations over them.

pub mod algebra;
pub mod rules;

pub use algebra::{characters_in, characters_not_in, CharactersIn, CharactersNotIn};
pub use rules::{lookup, Rule, RuleDef, Token, Tokens, UnknownRuleError};
