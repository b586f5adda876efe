//! Per-language word lists
//!
//! Every keyword the parser knows lives here, once. Pattern tables and the
//! category classifier compile their regexes from these lists, so the three
//! languages stay consistent and each list can be tested on its own.
//!
//! All entries are plain lower-case words or phrases. They are regex-escaped
//! when compiled; a space inside an entry matches any run of whitespace.
//! Hindi and Marathi lists carry the common romanized and English forms
//! too, because recognizers in those locales emit code-mixed text.

use voice_ledger_core::{Category, Language, Metric, Period, TransactionType};

/// Words for one language
#[derive(Debug)]
pub struct Lexicon {
    pub language: Language,
    /// Currency words that may surround an amount ("50 rupees", "₹50")
    pub currency_words: &'static [&'static str],
    /// Connectives allowed between amount and description ("50 rupees for milk")
    pub linkers: &'static [&'static str],
    /// Words that turn an amount-first utterance into income
    pub income_keywords: &'static [&'static str],
    /// Verbs that, together with a target word, open the dashboard
    pub analytics_show_words: &'static [&'static str],
    pub analytics_target_words: &'static [&'static str],
    /// Phrases shown to the user when nothing matched
    pub example_phrases: &'static [&'static str],
}

pub static ENGLISH: Lexicon = Lexicon {
    language: Language::English,
    currency_words: &[
        "₹", "rs", "rs.", "inr", "rupee", "rupees", "rupaye", "rupaiye", "bucks",
    ],
    linkers: &["for", "of", "on", "worth", "worth of"],
    income_keywords: &[
        "sold", "sale", "sales", "selling", "received", "income", "earned", "earning",
        "earnings", "got", "revenue",
    ],
    analytics_show_words: &["show", "open", "display", "view", "see"],
    analytics_target_words: &[
        "dashboard", "analytics", "report", "reports", "chart", "charts", "graph", "graphs",
        "summary",
    ],
    example_phrases: &[
        "50 rupees milk",
        "sold 3 items for 150",
        "paid 5000 for rent",
        "spent 200 on petrol",
        "show today's sales",
        "check stock for sugar",
    ],
};

pub static HINDI: Lexicon = Lexicon {
    language: Language::Hindi,
    currency_words: &[
        "₹", "rs", "rs.", "रुपये", "रुपए", "रुपया", "रुपयों", "रूपये", "रूपए", "रु", "रु.",
        "rupee", "rupees", "rupaye",
    ],
    linkers: &["का", "की", "के", "में", "मे"],
    income_keywords: &[
        "बेचा", "बेची", "बेचे", "बिका", "बिकी", "बिके", "बिक्री", "मिला", "मिली", "मिले",
        "कमाया", "कमाई", "कमाए", "आय", "आमदनी", "प्राप्त", "becha", "bechi", "beche",
        "bikri", "mila", "mile", "kamaya", "kamai", "sold", "sale", "sales", "received",
        "income", "earned", "got",
    ],
    analytics_show_words: &[
        "दिखाओ", "दिखाइए", "दिखाएं", "खोलो", "खोलिए", "dikhao", "kholo", "show", "open",
        "display",
    ],
    analytics_target_words: &[
        "डैशबोर्ड", "डेशबोर्ड", "एनालिटिक्स", "रिपोर्ट", "चार्ट", "dashboard", "analytics",
        "report", "chart",
    ],
    example_phrases: &[
        "50 रुपये दूध खरीदा",
        "दूध बेचा 50 रुपये में",
        "किराये के लिए 5000 रुपये दिए",
        "आज की बिक्री दिखाओ",
        "चीनी कितनी बची है",
    ],
};

pub static MARATHI: Lexicon = Lexicon {
    language: Language::Marathi,
    currency_words: &[
        "₹", "rs", "rs.", "रुपये", "रुपए", "रुपया", "रुपयांना", "रुपयाला", "रुपयांचे",
        "रुपयांची", "रुपयांचा", "रुपयांचं", "रु", "रु.", "rupee", "rupees", "rupaye",
    ],
    linkers: &["चा", "ची", "चे", "ला", "साठी"],
    income_keywords: &[
        "विकले", "विकला", "विकली", "विकल्या", "विक्री", "मिळाले", "मिळाला", "मिळाली",
        "कमावले", "कमावला", "कमाई", "उत्पन्न", "vikle", "vikri", "milale", "kamavle",
        "sold", "sale", "sales", "received", "income", "earned", "got",
    ],
    analytics_show_words: &["दाखवा", "दाखव", "उघडा", "उघड", "dakhva", "ughda", "show", "open"],
    analytics_target_words: &[
        "डॅशबोर्ड", "विश्लेषण", "अहवाल", "रिपोर्ट", "dashboard", "analytics",
        "report",
    ],
    example_phrases: &[
        "50 रुपये दूध घेतले",
        "दूध विकले 50 रुपयांना",
        "भाड्यासाठी 5000 रुपये दिले",
        "आजची विक्री दाखवा",
        "साखर किती शिल्लक आहे",
    ],
};

/// Get the lexicon for a language
pub fn for_language(language: Language) -> &'static Lexicon {
    match language {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
        Language::Marathi => &MARATHI,
    }
}

/// Example phrasings to show when a transcript was not understood
pub fn example_phrases(language: Language) -> &'static [&'static str] {
    for_language(language).example_phrases
}

// =============================================================================
// SHARED MULTILINGUAL TABLES
// =============================================================================

/// Units that may follow a leading quantity ("sold 5 kg rice for 200")
pub static QUANTITY_UNITS: &[&str] = &[
    "kg", "kgs", "kilo", "kilos", "g", "gm", "gram", "grams", "l", "litre", "litres", "liter",
    "liters", "pc", "pcs", "piece", "pieces", "packet", "packets", "dozen", "box", "boxes",
    "bag", "bags", "किलो", "ग्राम", "लीटर", "लिटर", "पैकेट", "दर्जन", "डझन", "नग", "पाकीट",
];

/// Period words for data queries
pub static PERIOD_WORDS: &[(&str, Period)] = &[
    ("today", Period::Today),
    ("today's", Period::Today),
    ("todays", Period::Today),
    ("yesterday", Period::Yesterday),
    ("yesterday's", Period::Yesterday),
    ("this week", Period::Week),
    ("this week's", Period::Week),
    ("weekly", Period::Week),
    ("week's", Period::Week),
    ("this month", Period::Month),
    ("this month's", Period::Month),
    ("monthly", Period::Month),
    ("month's", Period::Month),
    ("this year", Period::Year),
    ("this year's", Period::Year),
    ("yearly", Period::Year),
    ("annual", Period::Year),
    ("आज", Period::Today),
    ("aaj", Period::Today),
    ("कल", Period::Yesterday),
    ("kal", Period::Yesterday),
    ("इस हफ्ते", Period::Week),
    ("इस सप्ताह", Period::Week),
    ("इस महीने", Period::Month),
    ("इस साल", Period::Year),
    ("काल", Period::Yesterday),
    ("या आठवड्या", Period::Week),
    ("या महिन्या", Period::Month),
    ("या वर्षा", Period::Year),
];

/// Metric words for data queries
pub static METRIC_WORDS: &[(&str, Metric)] = &[
    ("sales", Metric::Sales),
    ("sale", Metric::Sales),
    ("income", Metric::Income),
    ("earnings", Metric::Income),
    ("revenue", Metric::Income),
    ("expenses", Metric::Expenses),
    ("expense", Metric::Expenses),
    ("spending", Metric::Expenses),
    ("profit", Metric::Profit),
    ("profits", Metric::Profit),
    ("balance", Metric::Balance),
    ("transactions", Metric::Transactions),
    ("बिक्री", Metric::Sales),
    ("सेल", Metric::Sales),
    ("bikri", Metric::Sales),
    ("कमाई", Metric::Income),
    ("आमदनी", Metric::Income),
    ("आय", Metric::Income),
    ("kamai", Metric::Income),
    ("खर्च", Metric::Expenses),
    ("खर्चा", Metric::Expenses),
    ("kharcha", Metric::Expenses),
    ("मुनाफा", Metric::Profit),
    ("लाभ", Metric::Profit),
    ("munafa", Metric::Profit),
    ("बैलेंस", Metric::Balance),
    ("लेनदेन", Metric::Transactions),
    ("विक्री", Metric::Sales),
    ("vikri", Metric::Sales),
    ("उत्पन्न", Metric::Income),
    ("नफा", Metric::Profit),
    ("शिल्लक", Metric::Balance),
    ("व्यवहार", Metric::Transactions),
];

/// Verbs in "how much did I ..." questions
pub static QUERY_VERBS: &[(&str, Metric)] = &[
    ("earn", Metric::Income),
    ("earned", Metric::Income),
    ("make", Metric::Income),
    ("made", Metric::Income),
    ("sell", Metric::Sales),
    ("sold", Metric::Sales),
    ("spend", Metric::Expenses),
    ("spent", Metric::Expenses),
];

/// Income category keyword groups, checked in this order
pub static INCOME_CATEGORIES: &[(Category, &[&str])] = &[
    (
        Category::SalesRevenue,
        &[
            "sale", "sales", "sold", "selling", "revenue", "item", "items", "product",
            "products", "goods", "merchandise", "customer", "customers", "order", "orders",
            "बिक्री", "बेचा", "बेची", "बेचे", "बिका", "सेल", "माल", "सामान", "ग्राहक", "bikri",
            "becha", "विक्री", "विकले", "विकला", "विकली", "विकल्या", "वस्तू", "vikri",
        ],
    ),
    (
        Category::ServiceIncome,
        &[
            "service", "services", "repair", "repairs", "consulting", "consultation",
            "commission", "fee", "fees", "labour", "labor", "सेवा", "सर्विस", "मरम्मत",
            "कमीशन", "फीस", "मजदूरी", "दुरुस्ती", "सेवाशुल्क",
        ],
    ),
    (
        Category::InvestmentIncome,
        &[
            "interest", "dividend", "dividends", "investment", "returns", "ब्याज", "निवेश",
            "लाभांश", "व्याज", "गुंतवणूक",
        ],
    ),
];

/// Expense category keyword groups, checked in this order
pub static EXPENSE_CATEGORIES: &[(Category, &[&str])] = &[
    (
        Category::Rent,
        &[
            "rent", "rental", "lease", "किराया", "किराये", "किराए", "भाड़ा", "भाडा", "भाडे",
            "भाड्या", "भाडं", "kiraya", "bhade",
        ],
    ),
    (
        Category::Utilities,
        &[
            "electricity", "electric", "power", "water", "gas", "internet", "wifi", "phone",
            "mobile", "recharge", "bill", "bills", "utility", "utilities", "light", "बिजली",
            "पानी", "बिल", "गैस", "इंटरनेट", "रिचार्ज", "लाइट", "वीज", "लाईट", "पाणी", "bijli",
        ],
    ),
    (
        Category::Salaries,
        &[
            "salary", "salaries", "wage", "wages", "staff", "employee", "employees", "worker",
            "workers", "payroll", "वेतन", "तनख्वाह", "सैलरी", "मजदूरी", "कर्मचारी", "पगार",
            "मजुरी", "कामगार", "pagar", "tankhwah",
        ],
    ),
    (
        Category::Transportation,
        &[
            "transport", "transportation", "fuel", "petrol", "diesel", "delivery", "freight",
            "shipping", "taxi", "cab", "auto", "bus", "train", "travel", "courier", "पेट्रोल",
            "डीजल", "गाड़ी", "ट्रांसपोर्ट", "डिलीवरी", "यात्रा", "डिझेल", "प्रवास", "वाहतूक",
        ],
    ),
    (
        Category::Marketing,
        &[
            "marketing", "advertising", "advertisement", "ads", "ad", "promotion", "banner",
            "banners", "pamphlet", "pamphlets", "flyer", "flyers", "poster", "posters",
            "विज्ञापन", "प्रचार", "पोस्टर", "जाहिरात",
        ],
    ),
    (
        Category::Maintenance,
        &[
            "maintenance", "repair", "repairs", "servicing", "cleaning", "plumber",
            "electrician", "मरम्मत", "रखरखाव", "सफाई", "दुरुस्ती", "देखभाल", "स्वच्छता",
        ],
    ),
    (
        Category::InventoryPurchase,
        &[
            "inventory", "stock", "goods", "supplies", "supply", "material", "materials",
            "raw material", "purchase", "purchased", "bought", "wholesale", "milk",
            "vegetables", "vegetable", "fruits", "fruit", "grocery", "groceries", "rice",
            "sugar", "flour", "oil", "tea", "bread", "eggs", "items", "products", "दूध",
            "सब्जी", "सब्जियां", "फल", "चावल", "चीनी", "आटा", "तेल", "चाय", "अंडे", "माल",
            "सामान", "किराना", "खरीदा", "खरीदी", "खरीदे", "doodh", "sabzi", "भाजी", "भाज्या",
            "फळे", "तांदूळ", "साखर", "पीठ", "किराणा", "वस्तू", "घेतले", "खरेदी",
        ],
    ),
];

// =============================================================================
// LOOKUPS
// =============================================================================

/// Collapse internal whitespace so captured phrases compare against table entries
fn squash(token: &str) -> String {
    token.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a captured period phrase to its period
pub fn period_for(token: &str) -> Option<Period> {
    let token = squash(token);
    PERIOD_WORDS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, period)| *period)
}

/// Map a captured metric word to its metric
pub fn metric_for(token: &str) -> Option<Metric> {
    let token = squash(token);
    METRIC_WORDS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, metric)| *metric)
}

/// Map a "how much did I ..." verb to the metric it asks about
pub fn metric_for_verb(verb: &str) -> Option<Metric> {
    QUERY_VERBS
        .iter()
        .find(|(word, _)| *word == verb.trim())
        .map(|(_, metric)| *metric)
}

/// Keyword groups for a transaction type, in priority order
pub fn category_groups(
    transaction_type: TransactionType,
) -> &'static [(Category, &'static [&'static str])] {
    match transaction_type {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

/// Build a regex alternation from plain words
///
/// Longer entries come first so a prefix ("rs") never shadows a longer
/// word ("rs.") under leftmost-first matching. Equal lengths keep their
/// declared order.
pub fn alternation<S: AsRef<str>>(words: &[S]) -> String {
    let mut sorted: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
    sorted.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    sorted
        .iter()
        .map(|w| regex::escape(w).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

/// Regex source matching any of `words` as a whole word
pub fn whole_word_pattern<S: AsRef<str>>(words: &[S]) -> String {
    format!(r"(?i)(?:^|\W)(?:{})(?:\W|$)", alternation(words))
}
