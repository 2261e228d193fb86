/// Asset introspection report command.
pub mod info;

#[cfg(test)]
mod test_support;
