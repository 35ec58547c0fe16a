pub(crate) mod finals;
pub(crate) mod initial;
