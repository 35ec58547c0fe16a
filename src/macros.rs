#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::Pattern::Regex($crate::regex!($pat))
    };
}

#[macro_export]
macro_rules! pred {
    ($p:expr) => {
        $crate::Pattern::Predicate($p)
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:expr,
        prod: |$groups:ident : &[$grp_ty:ty]| -> $ret_ty:ty $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            pattern: $pat,
            production: Box::new(move |$groups: &[$grp_ty]| {
                let result: $ret_ty = $body;
                result
            }),
        }
    }};
}
