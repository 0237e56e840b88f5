//! Raw platform key codes understood by the engine.
//!
//! Codes follow the classic keyboard-event numbering where a letter key
//! reports the ASCII value of its upper-case form.

pub type Code = u32;

pub const W: Code = 87;
pub const A: Code = 65;
pub const S: Code = 83;
pub const D: Code = 68;

/// Code reported for a letter key, regardless of shift state.
pub fn for_letter(c: char) -> Option<Code> {
    c.is_ascii_alphabetic()
        .then(|| Code::from(c.to_ascii_uppercase()))
}
