use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// What a shopper is asking the chat widget for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Returns,
    Shipping,
    PriceInquiry,
    Recommendation,
    ProductSearch,
    Support,
    Greeting,
    /// Nothing recognised
    General,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Returns => "returns",
            Self::Shipping => "shipping",
            Self::PriceInquiry => "price_inquiry",
            Self::Recommendation => "recommendation",
            Self::ProductSearch => "product_search",
            Self::Support => "support",
            Self::Greeting => "greeting",
            Self::General => "general",
        };
        f.write_str(label)
    }
}

// checked in order, first hit wins
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Returns,
        &["return", "returns", "refund", "refunds", "exchange"],
    ),
    (
        Intent::Shipping,
        &["shipping", "delivery", "deliver", "ship", "track", "tracking"],
    ),
    (
        Intent::PriceInquiry,
        &[
            "price", "cost", "cheap", "cheapest", "expensive", "budget", "under", "below",
            "less than", "deal", "deals", "discount", "sale",
        ],
    ),
    (
        Intent::Recommendation,
        &["recommend", "suggest", "best", "top", "should i", "popular"],
    ),
    (
        Intent::ProductSearch,
        &[
            "need", "want", "looking for", "find", "search", "show me", "do you have",
            "buy", "new arrivals", "new",
        ],
    ),
    (
        Intent::Support,
        &[
            "help", "support", "how to", "problem", "issue", "not working", "contact",
            "account", "register",
        ],
    ),
    (
        Intent::Greeting,
        &["hi", "hello", "hey", "good morning", "good afternoon", "good evening"],
    ),
];

/// Keyword groups that point at a kind of product
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "electronics",
        &[
            "laptop", "phone", "computer", "tablet", "electronics", "smartphone", "device",
            "headphones", "camera",
        ],
    ),
    (
        "clothing",
        &["shirt", "pants", "dress", "jacket", "clothing", "apparel", "wear"],
    ),
    (
        "footwear",
        &["sneakers", "boots", "sandals", "footwear"],
    ),
    (
        "sports",
        &["sports", "fitness", "exercise", "gym", "athletic", "workout", "running", "yoga"],
    ),
    (
        "home",
        &["home", "kitchen", "furniture", "decor", "appliances", "coffee"],
    ),
    (
        "beauty",
        &["beauty", "makeup", "skincare", "cosmetics", "fragrance"],
    ),
];

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "you", "your", "are", "can", "any", "some", "with", "what", "which",
    "have", "has", "that", "this", "there", "please", "thanks", "thank", "about", "from",
    "than", "between", "less", "more", "much", "does", "how", "get", "got", "like", "would",
    "could", "something", "anything", "one", "ones", "me", "i'm", "im", "show", "looking",
    "tell", "see", "what's", "it's", "i'd",
];

/// Inclusive price bounds pulled from a message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

static UPPER_BOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:under|below|less than)\s+\$?(\d+(?:\.\d+)?)").expect("valid price regex")
});

static BOUNDED_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:between\s+|from\s+)?\$?(\d+(?:\.\d+)?)\s+(?:and|to)\s+\$?(\d+(?:\.\d+)?)")
        .expect("valid price regex")
});

/// Lowercase the message and pad every word with single spaces so
/// keyword phrases only match on word boundaries.
fn normalize(message: &str) -> String {
    let cleaned: String = message
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '\'' { c } else { ' ' })
        .collect();

    let mut normalized = String::with_capacity(cleaned.len() + 2);
    normalized.push(' ');
    for word in cleaned.split_whitespace() {
        normalized.push_str(word);
        normalized.push(' ');
    }
    normalized
}

fn has_keyword(normalized: &str, keyword: &str) -> bool {
    normalized.contains(&format!(" {keyword} "))
}

/// First intent whose keywords appear in the message.
pub fn detect_intent(message: &str) -> Intent {
    let normalized = normalize(message);
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| has_keyword(&normalized, k)))
        .map_or(Intent::General, |(intent, _)| *intent)
}

/// Name of the first category keyword group the message mentions.
pub fn detect_category_group(message: &str) -> Option<&'static str> {
    let normalized = normalize(message);
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| has_keyword(&normalized, k)))
        .map(|(group, _)| *group)
}

/// Price bounds such as "under $50" or "between 20 and 80".
pub fn extract_price_range(message: &str) -> Option<PriceRange> {
    let lowered = message.to_lowercase();

    if let Some(caps) = UPPER_BOUND.captures(&lowered) {
        let max = caps[1].parse().ok()?;
        return Some(PriceRange { min: 0.0, max });
    }

    let caps = BOUNDED_RANGE.captures(&lowered)?;
    let a: f64 = caps[1].parse().ok()?;
    let b: f64 = caps[2].parse().ok()?;
    Some(PriceRange {
        min: a.min(b),
        max: a.max(b),
    })
}

/// Words worth searching the catalog for.
///
/// Drops stop words, intent keywords, numbers and anything shorter than
/// three characters.
pub fn search_terms(message: &str) -> Vec<String> {
    let normalized = normalize(message);
    let is_intent_word = |word: &str| {
        INTENT_KEYWORDS
            .iter()
            .flat_map(|(_, keywords)| keywords.iter())
            .any(|k| *k == word)
    };

    let mut terms: Vec<String> = Vec::new();
    for word in normalized.split_whitespace() {
        if word.chars().count() <= 2
            || word.chars().all(|c| c.is_ascii_digit())
            || STOP_WORDS.contains(&word)
            || is_intent_word(word)
        {
            continue;
        }
        if !terms.iter().any(|t| t == word) {
            terms.push(word.to_string());
        }
    }
    terms
}
