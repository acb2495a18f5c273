//! Evolution chain flattening.
//!
//! PokéAPI evolution chains arrive as a recursive tree where each node names a
//! species and lists the species it evolves into. Consumers mostly want the
//! chain as a flat, ordered list of display names, so this module walks the
//! tree depth-first and title-cases each species name along the way.

use crate::{api::model::ChainNode, error::Error};

/// Maximum nesting depth accepted when walking a chain document.
///
/// Real chains are at most three stages deep; anything beyond this limit is a
/// malformed or malicious document and is rejected rather than walked.
pub const MAX_CHAIN_DEPTH: usize = 32;

/// Flattens an evolution chain tree into an ordered list of species names.
///
/// The tree is walked depth-first, parents before children, so a branching
/// chain like Eevee's lists the base form first followed by each evolution.
/// Species names are title-cased for display (`"mr-mime"` becomes `"Mr-Mime"`).
///
/// # Errors
/// Returns [`Error::MalformedChain`] when the tree nests deeper than
/// [`MAX_CHAIN_DEPTH`] levels.
pub fn flatten_chain(chain: &ChainNode) -> Result<Vec<String>, Error> {
    let mut names = Vec::new();
    collect_names(chain, &mut names, 1)?;

    Ok(names)
}

fn collect_names(node: &ChainNode, names: &mut Vec<String>, depth: usize) -> Result<(), Error> {
    if depth > MAX_CHAIN_DEPTH {
        return Err(Error::MalformedChain(format!(
            "nested deeper than {} levels",
            MAX_CHAIN_DEPTH
        )));
    }

    names.push(title_case(&node.species.name));

    for child in &node.evolves_to {
        collect_names(child, names, depth + 1)?;
    }

    Ok(())
}

/// Title-cases a species slug: the first letter of every alphabetic run is
/// uppercased and the rest lowercased, leaving separators untouched.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;

    for ch in name.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
