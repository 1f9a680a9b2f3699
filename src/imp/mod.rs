pub mod config;
pub mod loader;
pub mod minify;
pub mod namelist;
pub mod save;

macro_rules! stage_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(String);
        impl $name {
            pub fn new(inner: String) -> $name {
                $name(inner)
            }
            pub fn into_inner(self) -> String {
                let $name(inner) = self;
                inner
            }
            pub fn inner(&self) -> &str {
                let &$name(ref inner) = self;
                inner
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, b: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(b, "{}", self.inner())
            }
        }
    };
}

stage_newtype! {
    /// Concatenated raw file contents, as produced by the loader.
    RawSource
}

stage_newtype! {
    /// The final bundle text after the (optional) minification pass.
    Minified
}
