use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Optional document-level rules applied after per-sentence chunking.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Rules: u32 {
        /// Merge recurring `NP (stopword)+ NP` patterns.
        const COMBINE_NP = 0x01;
    }
}

impl Rules {
    /// Resolve named boolean options such as `("combine_np", true)`.
    /// Unknown names are ignored.
    pub fn from_options<'a, I>(options: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut rules = Rules::empty();
        for (name, enabled) in options {
            let flag = match name {
                "combine_np" => Rules::COMBINE_NP,
                _ => {
                    log::warn!("ignoring unknown chunker option: {name}");
                    continue;
                }
            };
            rules.set(flag, enabled);
        }
        rules
    }
}
