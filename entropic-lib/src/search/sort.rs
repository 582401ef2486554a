use std::cmp::Ordering;

use icu_collator::{CaseFirst, Collator, CollatorOptions, Strength};

use crate::catalog::Product;
use crate::score::Scorer;
use crate::search::SortMode;

thread_local! {
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        options.case_first = Some(CaseFirst::LowerFirst);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// Compare display names the way the product grid orders them.
///
/// Uses root-locale Unicode collation, so accented letters sort with
/// their base letter and names that differ only in case put the
/// lowercase form first. Names the collator considers equal fall back
/// to a code point comparison so the order stays total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase)),
        })
        .then_with(|| b.cmp(a))
}

/// Order an already filtered result set in place.
///
/// The sort is stable: products equal under the selected key keep their
/// catalog order.
pub fn sort_products<R: Scorer + ?Sized>(
    products: &mut Vec<&Product>,
    mode: SortMode,
    search_term: &str,
    scorer: &R,
) {
    match mode {
        SortMode::PriceAscending => {
            products.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        SortMode::PriceDescending => {
            products.sort_by(|a, b| b.price.total_cmp(&a.price));
        }
        SortMode::Relevance => {
            // score once per product rather than once per comparison
            let mut scored: Vec<(u32, &Product)> = products
                .iter()
                .map(|&p| (scorer.score(p, search_term), p))
                .collect();

            scored.sort_by(|(score_a, a), (score_b, b)| {
                score_b
                    .cmp(score_a)
                    .then_with(|| compare_names(&a.name, &b.name))
            });

            products.clear();
            products.extend(scored.into_iter().map(|(_, p)| p));
        }
    }
}
