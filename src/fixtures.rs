#[cfg(test)]
pub mod test {
    use crate::accessor::Env;
    use crate::source::MapEnv;

    /// In-memory variables from literal pairs.
    pub fn env_with(pairs: &[(&str, &str)]) -> MapEnv {
        MapEnv::from_pairs(pairs.iter().copied())
    }

    /// Default accessor over [`env_with`].
    pub fn accessor(pairs: &[(&str, &str)]) -> Env<MapEnv> {
        Env::with_source(env_with(pairs))
    }

    #[test]
    fn accessor_reads_fixture_pairs() {
        let env = accessor(&[("HOST", "localhost"), ("PORT", "8080")]);
        assert_eq!(env.get_string("HOST"), "localhost");
        assert_eq!(env.get_int("PORT"), 8080);
    }
}
