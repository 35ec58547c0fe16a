pub mod consonants;
pub mod glides;
pub mod rules;

#[cfg(test)]
mod tests;
