//! Page classification by literal keyword search.
//!
//! Each parse needs to know which uploaded screenshot shows which screen.
//! Classification is a case-insensitive substring scan over each image's
//! tokens, in upload order; the first qualifying image wins.

use crate::error::Error;
use crate::token::Token;

/// Keyword search describing one screen type.
///
/// `exclude` terms handle overlay screens that reuse the keyword's wording:
/// a token containing any of them disqualifies the whole image on the spot.
/// The current report pipeline searches with plain keywords; the legacy
/// strict stats search remains available for captures that include the
/// special-bonuses overlay.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub keyword: &'static str,
    pub exclude: &'static [&'static str],
}

impl PageQuery {
    /// Battle-report stats table.
    pub const STATS: PageQuery = PageQuery {
        keyword: "stat",
        exclude: &[],
    };

    /// Stats table, rejecting the special-bonuses / enemy overlay that uses
    /// similar terminology.
    pub const STATS_STRICT: PageQuery = PageQuery {
        keyword: "stat",
        exclude: &["special", "enemy"],
    };

    /// Battle-overview outcome table.
    pub const BATTLE_OVERVIEW: PageQuery = PageQuery {
        keyword: "battle overview",
        exclude: &[],
    };
}

/// Finds the first image whose tokens match `query`. Returns the image's
/// index in the batch along with its tokens.
pub fn find_page<'a>(
    images: &'a [Vec<Token>],
    query: &PageQuery,
) -> Result<(usize, &'a [Token]), Error> {
    for (index, tokens) in images.iter().enumerate() {
        let mut matched = false;
        let mut disqualified = false;
        for token in tokens {
            let text = token.text.to_lowercase();
            if let Some(term) = query.exclude.iter().find(|term| text.contains(*term)) {
                tracing::debug!(image = index, term = %term, text = %token.text, "image disqualified");
                disqualified = true;
                break;
            }
            if text.contains(query.keyword) {
                matched = true;
                if query.exclude.is_empty() {
                    // Nothing can disqualify this image; stop scanning it.
                    tracing::debug!(image = index, keyword = query.keyword, "page selected");
                    return Ok((index, tokens));
                }
            }
        }
        if matched && !disqualified {
            tracing::debug!(image = index, keyword = query.keyword, "page selected");
            return Ok((index, tokens));
        }
    }
    Err(Error::PageNotFound(query.keyword.to_string()))
}
