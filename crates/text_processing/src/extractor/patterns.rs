//! Pattern tables
//!
//! One table per language, compiled once on first use. Every table keeps its
//! patterns as ordered lists: within a family the first pattern that matches
//! wins, so more specific phrasings are declared before looser ones.
//!
//! Templates use named groups (`amount`, `description`, `detail`, `period`,
//! `period_after`, `metric`, `verb`, `product`), so verb-final templates
//! where the description precedes the amount need no positional bookkeeping.
//! `detail` is trailing text after the amount ("sold milk for 40 to ramesh");
//! it is appended to the description.
//! Placeholders are expanded from the language's lexicon:
//!
//! - `{amount}`: optional currency word, the `amount` digits, optional currency word
//! - `{quantity}`: optional leading quantity with unit ("3 ", "5 kg ")
//! - `{linker}`: connectives between amount and description
//! - `{period}`, `{metric}`, `{verbs}`: query vocabulary
//! - `{end}`: trailing whitespace or sentence punctuation, then end of text
//!
//! Hindi and Marathi tables append the English templates after their own,
//! so code-mixed utterances still parse.

use once_cell::sync::Lazy;
use regex::Regex;
use voice_ledger_core::{Language, Metric, Period, TransactionType};

use super::amount::parse_amount;
use crate::lexicon::{self, Lexicon};
use crate::normalizer::clean_phrase;

/// Template source: (name, regex template)
type Template = (&'static str, &'static str);

// =============================================================================
// ENGLISH TEMPLATES
// =============================================================================

const SIMPLE: &str = r"^{amount}\s+(?:(?:{linker})\s+)?(?P<description>.+)$";

const EN_INCOME: &[Template] = &[
    ("add_income", r"^add\s+(?:an?\s+)?(?:new\s+)?income\s+(?:of\s+)?{amount}(?:\s+(?:(?:for|from|of)\s+)?(?P<description>.+?))?{end}"),
    ("received", r"^(?:i\s+|we\s+)?(?:have\s+)?received\s+{amount}(?:\s+(?:(?:for|from)\s+)?(?P<description>.+?))?{end}"),
    ("sales_of", r"^(?:a\s+)?sales?\s+of\s+{amount}(?:\s+(?:(?:for|from)\s+)?(?P<description>.+?))?{end}"),
    ("sold_for", r"^(?:i\s+|we\s+)?sold\s+{quantity}(?P<description>.+?)\s+for\s+{amount}(?:\s+(?P<detail>.+?))?{end}"),
    ("earned_from", r"^(?:i\s+|we\s+)?(?:earned|got|made)\s+{amount}(?:\s+(?:(?:from|for|by)\s+)?(?P<description>.+?))?{end}"),
    ("income_amount", r"^income\s+(?:of\s+)?{amount}(?:\s+(?:(?:from|for)\s+)?(?P<description>.+?))?{end}"),
    ("amount_income", r"^{amount}\s+income(?:\s+(?:(?:from|for)\s+)?(?P<description>.+?))?{end}"),
];

const EN_EXPENSE: &[Template] = &[
    ("add_expense", r"^add\s+(?:an?\s+)?(?:new\s+)?expenses?\s+(?:of\s+)?{amount}(?:\s+(?:(?:for|on|of)\s+)?(?P<description>.+?))?{end}"),
    ("spent_on", r"^(?:i\s+|we\s+)?(?:have\s+)?spent\s+{amount}(?:\s+(?:(?:on|for)\s+)?(?P<description>.+?))?{end}"),
    ("paid_for", r"^(?:i\s+|we\s+)?(?:have\s+)?paid\s+{amount}(?:\s+(?:(?:for|to|on|towards)\s+)?(?P<description>.+?))?{end}"),
    ("paid_item_amount", r"^(?:i\s+|we\s+)?(?:have\s+)?paid\s+(?:the\s+)?(?P<description>.+?)\s+(?:of\s+)?{amount}{end}"),
    ("bought_for", r"^(?:i\s+|we\s+)?bought\s+{quantity}(?P<description>.+?)\s+for\s+{amount}(?:\s+(?P<detail>.+?))?{end}"),
    ("expense_amount", r"^expenses?\s+(?:of\s+)?{amount}(?:\s+(?:(?:for|on)\s+)?(?P<description>.+?))?{end}"),
    ("amount_expense", r"^{amount}\s+expenses?(?:\s+(?:(?:for|on)\s+)?(?P<description>.+?))?{end}"),
    ("purchased_for", r"^(?:i\s+|we\s+)?purchased\s+{quantity}(?P<description>.+?)\s+for\s+{amount}(?:\s+(?P<detail>.+?))?{end}"),
];

const EN_QUERY: &[Template] = &[
    ("show_period_metric", r"^(?:please\s+)?show\s+(?:me\s+)?(?:(?:my|the|our)\s+)?(?P<period>{period})\s+(?P<metric>{metric}){end}"),
    ("show_metric_period", r"^(?:please\s+)?show\s+(?:me\s+)?(?:(?:my|the|our)\s+)?(?P<metric>{metric})\s+(?:(?:for|of)\s+)?(?P<period_after>{period}){end}"),
    ("what_is_metric", r"^what(?:'s|\s+is|\s+are|\s+was|\s+were)\s+(?:my|the|our)\s+(?:(?P<period>{period})\s+)?(?P<metric>{metric})(?:\s+(?:for\s+)?(?P<period_after>{period}))?{end}"),
    ("how_much_did_i", r"^how\s+much\s+(?:did|have)\s+(?:i|we)\s+(?P<verb>{verbs})(?:\s+(?P<period_after>{period}))?{end}"),
];

const EN_STOCK: &[Template] = &[
    ("check_stock_for", r"^(?:please\s+)?check\s+(?:the\s+)?(?:stock|inventory)\s+(?:for|of)\s+(?P<product>.+?){end}"),
    ("check_product_stock", r"^(?:please\s+)?check\s+(?:the\s+)?(?P<product>.+?)\s+stock{end}"),
    ("stock_level", r"^(?:(?:what\s+is|what's|show|show\s+me)\s+)?(?:the\s+)?stock\s+level\s+(?:of|for)\s+(?P<product>.+?){end}"),
    ("how_many_in_stock", r"^how\s+many\s+(?P<product>.+?)\s+(?:(?:do\s+(?:i|we)\s+have|are\s+(?:there|left)|left)(?:\s+(?:in\s+(?:stock|inventory)|remaining))?|in\s+(?:stock|inventory)|remaining){end}"),
    // Bare form: one or two product words, so questions like "how many items did i sell" stay out
    ("how_many", r"^how\s+many\s+(?P<product>[^\s?.!,।]+(?:\s+[^\s?.!,।]+)?){end}"),
];

// =============================================================================
// HINDI TEMPLATES
// =============================================================================

const HI_INCOME: &[Template] = &[
    ("add_income", r"^(?:आय|आमदनी|income)\s+(?:जो(?:ड\x{093C}|\x{095C})(?:ो|ें|िए)|add\s+(?:karo|करो)|add)\s+{amount}(?:\s+(?P<description>.+?))?{end}"),
    ("item_sold_for_amount", r"^(?P<description>.+?)\s+(?:बेचा|बेची|बेचे|becha|bechi|beche)\s+{amount}(?:\s+(?:में|मे|mein|me))?{end}"),
    ("item_amount_sold", r"^(?P<description>.+?)\s+{amount}(?:\s+(?:में|मे|का|की|के|mein|me))?\s+(?:बेचा|बेची|बेचे|becha|bechi|beche)(?:\s+(?:है|हैं|hai))?{end}"),
    ("sold_item_amount", r"^(?:बेचा|बेची|बेचे|becha|bechi|beche)\s+{quantity}(?P<description>.+?)\s+{amount}(?:\s+(?:में|मे|mein|me))?{end}"),
    ("received_from", r"^(?P<description>.+?)\s+(?:से|se)\s+{amount}\s+(?:मिले|मिला|मिली|प्राप्त\s+हुए|mile|mila|mili)(?:\s+(?:हैं|है|hai))?{end}"),
    ("given_by", r"^(?P<description>.+?)\s+(?:ने|ne)\s+{amount}\s+(?:दिए|दिये|दिया|diye|diya)(?:\s+(?:हैं|है|hai))?{end}"),
    ("earned_from", r"^(?P<description>.+?)\s+(?:से|se)\s+{amount}\s+(?:कमाए|कमाया|kamaye|kamaya)(?:\s+(?:हैं|है|hai))?{end}"),
    ("income_amount", r"^(?:आय|आमदनी|कमाई|income|aay|amdani)\s+{amount}(?:\s+(?:(?:का|की|के|से)\s+)?(?P<description>.+?))?{end}"),
    ("sale_amount", r"^(?:बिक्री|सेल|bikri|sale)\s+{amount}(?:\s+(?:(?:का|की|के)\s+)?(?P<description>.+?))?{end}"),
];

const HI_EXPENSE: &[Template] = &[
    ("add_expense", r"^(?:खर्च|खर्चा|expense)\s+(?:जो(?:ड\x{093C}|\x{095C})(?:ो|ें|िए)|add\s+(?:karo|करो)|add)\s+{amount}(?:\s+(?P<description>.+?))?{end}"),
    ("item_bought_for_amount", r"^(?P<description>.+?)\s+(?:खरीदा|खरीदी|खरीदे|kharida|kharidi|kharide)\s+{amount}(?:\s+(?:में|मे|mein|me))?{end}"),
    ("item_amount_bought", r"^(?P<description>.+?)\s+{amount}(?:\s+(?:में|मे|का|की|के|mein|me))?\s+(?:खरीदा|खरीदी|खरीदे|kharida|kharidi|kharide)(?:\s+(?:है|हैं|hai))?{end}"),
    ("bought_item_amount", r"^(?:खरीदा|खरीदी|खरीदे|kharida|kharidi|kharide)\s+{quantity}(?P<description>.+?)\s+{amount}(?:\s+(?:में|मे|mein|me))?{end}"),
    ("paid_for", r"^(?P<description>.+?)\s+(?:के\s+लिए|के\s+लिये|को|ke\s+liye|ko)\s+{amount}\s+(?:दिए|दिये|दिया|दी|चुकाए|चुकाया|भरे|भरा|diye|diya)(?:\s+(?:हैं|है|hai))?{end}"),
    ("item_amount_paid", r"^(?P<description>.+?)\s+{amount}\s+(?:दिए|दिये|दिया|चुकाए|चुकाया|भरे|भरा|diye|diya)(?:\s+(?:हैं|है|hai))?{end}"),
    ("spent_on", r"^(?P<description>.+?)\s+(?:पर|में|pe|par|mein)\s+{amount}\s+(?:खर्च|खर्चे|kharch|kharche)(?:\s+(?:किए|किये|किया|की|हुए|हुआ|kiye|kiya|hue|hua))?(?:\s+(?:हैं|है|hai))?{end}"),
    ("expense_amount", r"^(?:खर्च|खर्चा|kharch|kharcha|expense)\s+{amount}(?:\s+(?:(?:का|की|के)\s+)?(?P<description>.+?))?{end}"),
];

const HI_QUERY: &[Template] = &[
    ("period_metric_show", r"^(?P<period>{period})\s+(?:की|का|के|ki|ka|ke)\s+(?P<metric>{metric})\s+(?:दिखाओ|दिखाइए|दिखाएं|बताओ|बताइए|बताएं|dikhao|batao|show){end}"),
    ("period_how_much", r"^(?P<period>{period})\s+(?:कितना|कितनी|कितने|kitna|kitni)\s+(?P<metric>{metric})\s+(?:हुआ|हुई|हुए|hua|hui|hue)(?:\s+(?:है|hai))?{end}"),
    ("my_metric", r"^(?:मेरा|मेरी|मेरे|हमारा|हमारी|हमारे|mera|meri)\s+(?:(?P<period>{period})\s+(?:का|की|के)\s+)?(?P<metric>{metric})\s+(?:क्या|कितना|कितनी|kya|kitna)\s+(?:है|hai){end}"),
    ("metric_show", r"^(?P<metric>{metric})\s+(?:दिखाओ|दिखाइए|बताओ|बताइए|dikhao|batao){end}"),
];

const HI_STOCK: &[Template] = &[
    ("product_stock_check", r"^(?P<product>.+?)\s+(?:का|की|के|ka|ki|ke)\s+(?:स्टॉक|स्टाक|stock|माल)\s+(?:चेक\s+करो|चेक\s+कीजिए|देखो|बताओ|दिखाओ|check\s+karo|dikhao|batao){end}"),
    ("how_many_left", r"^(?P<product>.+?)\s+(?:कितने|कितना|कितनी|kitne|kitna|kitni)\s+(?:बचे|बचा|बची|bache|bacha|bachi)(?:\s+(?:हैं|है|hai))?{end}"),
];

// =============================================================================
// MARATHI TEMPLATES
// =============================================================================

const MR_INCOME: &[Template] = &[
    ("add_income", r"^(?:उत्पन्न|income)\s+(?:जोडा|जोड|add\s+kara|add)\s+{amount}(?:\s+(?P<description>.+?))?{end}"),
    ("item_sold_for_amount", r"^(?P<description>.+?)\s+(?:विकले|विकला|विकली|विकल्या|vikle|vikla)\s+{amount}(?:\s*(?:ला|ना|मध्ये))?{end}"),
    ("item_amount_sold", r"^(?P<description>.+?)\s+{amount}(?:\s*(?:ला|ना|मध्ये))?\s+(?:विकले|विकला|विकली|विकल्या|vikle|vikla)(?:\s+(?:आहेत|आहे))?{end}"),
    ("received_from", r"^(?P<description>.+?)\s*(?:कडून|पासून|kadun)\s+{amount}\s+(?:मिळाले|मिळाला|मिळाली|milale|milala)(?:\s+(?:आहेत|आहे))?{end}"),
    ("given_by", r"^(?P<description>.+?)(?:ने|ांनी)\s+{amount}\s+(?:दिले|दिला|dile)(?:\s+(?:आहेत|आहे))?{end}"),
    ("earned_from", r"^(?P<description>.+?)\s*(?:मधून|तून|पासून|madhun)\s+{amount}\s+(?:कमावले|कमावला|कमावली|kamavle)(?:\s+(?:आहेत|आहे))?{end}"),
    ("income_amount", r"^(?:उत्पन्न|कमाई|income|utpanna)\s+{amount}(?:\s+(?P<description>.+?))?{end}"),
    ("sale_amount", r"^(?:विक्री|vikri|sale)\s+{amount}(?:\s+(?P<description>.+?))?{end}"),
];

const MR_EXPENSE: &[Template] = &[
    ("add_expense", r"^(?:खर्च|expense)\s+(?:जोडा|जोड|add\s+kara|add)\s+{amount}(?:\s+(?P<description>.+?))?{end}"),
    ("item_bought_for_amount", r"^(?P<description>.+?)\s+(?:खरेदी\s+केले|खरेदी\s+केली|खरेदी\s+केला|विकत\s+घेतले|विकत\s+घेतला|घेतले|घेतला|घेतली|kharedi\s+kele|ghetle)\s+{amount}(?:\s*(?:ला|ना|मध्ये))?{end}"),
    ("item_amount_bought", r"^(?P<description>.+?)\s+{amount}(?:\s*(?:ला|ना|मध्ये))?\s+(?:खरेदी\s+केले|खरेदी\s+केली|खरेदी\s+केला|विकत\s+घेतले|विकत\s+घेतला|घेतले|घेतला|घेतली|kharedi\s+kele|ghetle)(?:\s+(?:आहेत|आहे))?{end}"),
    ("paid_for", r"^(?P<description>.+?)\s*(?:साठी|sathi)\s+{amount}\s+(?:दिले|भरले|दिला|भरला|dile|bharle)(?:\s+(?:आहेत|आहे))?{end}"),
    ("item_amount_paid", r"^(?P<description>.+?)\s+{amount}\s+(?:दिले|भरले|दिला|भरला|dile|bharle)(?:\s+(?:आहेत|आहे))?{end}"),
    ("spent_on", r"^(?P<description>.+?)\s*(?:वर|साठी|var)\s+{amount}\s+(?:खर्च|kharch)(?:\s+(?:केले|केला|केली|झाले|झाला|kele|kela))?{end}"),
    ("expense_amount", r"^(?:खर्च|kharch|expense)\s+{amount}(?:\s+(?P<description>.+?))?{end}"),
];

const MR_QUERY: &[Template] = &[
    ("period_metric_show", r"^(?P<period>{period})\s*(?:ची|चा|चे|च्या|chi|cha)\s+(?P<metric>{metric})\s+(?:दाखवा|दाखव|सांगा|सांग|dakhva|sanga){end}"),
    ("period_how_much", r"^(?P<period>{period})\s+(?:किती|kiti)\s+(?P<metric>{metric})\s+(?:झाला|झाली|झाले|jhala|jhali)(?:\s+(?:आहे|आहेत))?{end}"),
    ("my_metric", r"^(?:माझा|माझी|माझे|आमचा|आमची|आमचे|majha|majhi)\s+(?:(?P<period>{period})\s*(?:ची|चा|चे|च्या)\s+)?(?P<metric>{metric})\s+(?:किती|काय|kiti)\s+(?:आहे|ahe){end}"),
    ("metric_show", r"^(?P<metric>{metric})\s+(?:दाखवा|दाखव|सांगा|dakhva|sanga){end}"),
];

const MR_STOCK: &[Template] = &[
    ("product_stock_check", r"^(?P<product>.+?)\s*(?:चा|ची|चे|चं|cha|chi)\s+(?:स्टॉक|stock|साठा)\s+(?:तपासा|बघा|दाखवा|सांगा|tapasa|bagha){end}"),
    ("how_many_left", r"^(?P<product>.+?)\s+(?:किती|kiti)\s+(?:शिल्लक|उरले|उरला|उरली|shillak)(?:\s+(?:आहेत|आहे|ahe))?{end}"),
];

// =============================================================================
// COMPILED TABLES
// =============================================================================

/// Amount and description pulled from a transaction pattern
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionMatch {
    pub amount: f64,
    /// Empty when the template's description group did not participate
    pub description: String,
}

/// Compiled transaction pattern
#[derive(Debug)]
pub struct TransactionPattern {
    pub name: &'static str,
    regex: Regex,
    /// `None` for the amount-first pattern, whose type is decided by keyword voting
    pub implied_type: Option<TransactionType>,
}

impl TransactionPattern {
    /// Match and extract; a malformed amount counts as no match
    pub fn extract(&self, text: &str) -> Option<TransactionMatch> {
        let caps = self.regex.captures(text)?;
        let amount = parse_amount(caps.name("amount")?.as_str())?;
        let mut description = caps
            .name("description")
            .map(|m| clean_phrase(m.as_str()))
            .unwrap_or_default();
        if let Some(detail) = caps.name("detail").map(|m| clean_phrase(m.as_str())) {
            if !detail.is_empty() {
                if !description.is_empty() {
                    description.push(' ');
                }
                description.push_str(&detail);
            }
        }
        Some(TransactionMatch { amount, description })
    }
}

/// Compiled data query pattern
#[derive(Debug)]
pub struct QueryPattern {
    pub name: &'static str,
    regex: Regex,
}

impl QueryPattern {
    /// Match and resolve period and metric vocabulary
    pub fn extract(&self, text: &str) -> Option<(Option<Period>, Metric)> {
        let caps = self.regex.captures(text)?;
        let metric = match caps.name("metric") {
            Some(m) => lexicon::metric_for(m.as_str())?,
            None => lexicon::metric_for_verb(caps.name("verb")?.as_str())?,
        };
        let period = caps
            .name("period")
            .or_else(|| caps.name("period_after"))
            .and_then(|m| lexicon::period_for(m.as_str()));
        Some((period, metric))
    }
}

/// Compiled stock check pattern
#[derive(Debug)]
pub struct StockPattern {
    pub name: &'static str,
    regex: Regex,
}

impl StockPattern {
    /// Match and extract a non-empty product phrase
    pub fn extract(&self, text: &str) -> Option<String> {
        let caps = self.regex.captures(text)?;
        let product = clean_phrase(caps.name("product")?.as_str());
        (!product.is_empty()).then_some(product)
    }
}

/// Analytics trigger: a "show" word and a "dashboard" word anywhere in the text
#[derive(Debug)]
pub struct AnalyticsTrigger {
    show: Regex,
    target: Regex,
}

impl AnalyticsTrigger {
    pub fn is_match(&self, text: &str) -> bool {
        self.show.is_match(text) && self.target.is_match(text)
    }
}

/// All compiled patterns for one language
#[derive(Debug)]
pub struct PatternTable {
    pub language: Language,
    pub simple: TransactionPattern,
    income_keywords: Regex,
    pub income: Vec<TransactionPattern>,
    pub expense: Vec<TransactionPattern>,
    pub query: Vec<QueryPattern>,
    pub stock: Vec<StockPattern>,
    pub analytics: AnalyticsTrigger,
}

impl PatternTable {
    /// Whether a description carries an income keyword for this language
    pub fn has_income_keyword(&self, description: &str) -> bool {
        self.income_keywords.is_match(description)
    }

    fn build(lexicon: &'static Lexicon, native: &NativeTemplates) -> Self {
        let expander = Expander::new(lexicon);
        let code_mixed = lexicon.language != Language::English;

        let with_english = |own: &'static [Template], english: &'static [Template]| {
            let mut all: Vec<Template> = own.to_vec();
            if code_mixed {
                all.extend_from_slice(english);
            }
            all
        };

        let transactions = |templates: Vec<Template>, implied: TransactionType| {
            templates
                .into_iter()
                .map(|(name, template)| TransactionPattern {
                    name,
                    regex: expander.compile(name, template),
                    implied_type: Some(implied),
                })
                .collect::<Vec<_>>()
        };

        Self {
            language: lexicon.language,
            simple: TransactionPattern {
                name: "amount_description",
                regex: expander.compile("amount_description", SIMPLE),
                implied_type: None,
            },
            income_keywords: compile_words("income_keywords", lexicon.income_keywords),
            income: transactions(with_english(native.income, EN_INCOME), TransactionType::Income),
            expense: transactions(
                with_english(native.expense, EN_EXPENSE),
                TransactionType::Expense,
            ),
            query: with_english(native.query, EN_QUERY)
                .into_iter()
                .map(|(name, template)| QueryPattern {
                    name,
                    regex: expander.compile(name, template),
                })
                .collect(),
            stock: with_english(native.stock, EN_STOCK)
                .into_iter()
                .map(|(name, template)| StockPattern {
                    name,
                    regex: expander.compile(name, template),
                })
                .collect(),
            analytics: AnalyticsTrigger {
                show: compile_words("analytics_show", lexicon.analytics_show_words),
                target: compile_words("analytics_target", lexicon.analytics_target_words),
            },
        }
    }
}

struct NativeTemplates {
    income: &'static [Template],
    expense: &'static [Template],
    query: &'static [Template],
    stock: &'static [Template],
}

/// Expands template placeholders for one language
struct Expander {
    amount: String,
    quantity: String,
    linker: String,
    period: String,
    metric: String,
    verbs: String,
}

const END: &str = r"[\s?.!,।]*$";

impl Expander {
    fn new(lexicon: &Lexicon) -> Self {
        let currency = lexicon::alternation(lexicon.currency_words);
        let period_words: Vec<&str> = lexicon::PERIOD_WORDS.iter().map(|(w, _)| *w).collect();
        let metric_words: Vec<&str> = lexicon::METRIC_WORDS.iter().map(|(w, _)| *w).collect();
        let verbs: Vec<&str> = lexicon::QUERY_VERBS.iter().map(|(w, _)| *w).collect();

        Self {
            amount: format!(
                r"(?:(?:{cur})\s*)?(?P<amount>\d+(?:\.\d+)?)(?:\s*(?:{cur}))?",
                cur = currency
            ),
            quantity: format!(
                r"(?:\d+(?:\.\d+)?\s*(?:{})?\s+)?",
                lexicon::alternation(lexicon::QUANTITY_UNITS)
            ),
            linker: lexicon::alternation(lexicon.linkers),
            period: lexicon::alternation(&period_words),
            metric: lexicon::alternation(&metric_words),
            verbs: lexicon::alternation(&verbs),
        }
    }

    fn compile(&self, name: &str, template: &str) -> Regex {
        let source = template
            .replace("{amount}", &self.amount)
            .replace("{quantity}", &self.quantity)
            .replace("{linker}", &self.linker)
            .replace("{period}", &self.period)
            .replace("{metric}", &self.metric)
            .replace("{verbs}", &self.verbs)
            .replace("{end}", END);
        Regex::new(&format!("(?i){}", source))
            .unwrap_or_else(|e| panic!("Invalid built-in pattern '{}': {}", name, e))
    }
}

fn compile_words(name: &str, words: &[&str]) -> Regex {
    Regex::new(&lexicon::whole_word_pattern(words))
        .unwrap_or_else(|e| panic!("Invalid built-in word list '{}': {}", name, e))
}

static ENGLISH: Lazy<PatternTable> = Lazy::new(|| {
    PatternTable::build(
        &lexicon::ENGLISH,
        &NativeTemplates {
            income: EN_INCOME,
            expense: EN_EXPENSE,
            query: EN_QUERY,
            stock: EN_STOCK,
        },
    )
});

static HINDI: Lazy<PatternTable> = Lazy::new(|| {
    PatternTable::build(
        &lexicon::HINDI,
        &NativeTemplates {
            income: HI_INCOME,
            expense: HI_EXPENSE,
            query: HI_QUERY,
            stock: HI_STOCK,
        },
    )
});

static MARATHI: Lazy<PatternTable> = Lazy::new(|| {
    PatternTable::build(
        &lexicon::MARATHI,
        &NativeTemplates {
            income: MR_INCOME,
            expense: MR_EXPENSE,
            query: MR_QUERY,
            stock: MR_STOCK,
        },
    )
});

/// Get the compiled table for a language
pub fn table(language: Language) -> &'static PatternTable {
    match language {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
        Language::Marathi => &MARATHI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction<'a>(patterns: &'a [TransactionPattern], name: &str) -> &'a TransactionPattern {
        patterns
            .iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("no pattern named {}", name))
    }

    #[test]
    fn test_all_tables_compile() {
        for language in Language::ALL {
            let table = table(language);
            assert_eq!(table.language, language);
            assert!(!table.income.is_empty());
            assert!(!table.expense.is_empty());
            assert!(!table.query.is_empty());
            assert!(!table.stock.is_empty());
        }
    }

    #[test]
    fn test_transaction_templates_name_their_groups() {
        for language in Language::ALL {
            let table = table(language);
            let patterns = std::iter::once(&table.simple)
                .chain(table.income.iter())
                .chain(table.expense.iter());
            for pattern in patterns {
                let names: Vec<&str> = pattern.regex.capture_names().flatten().collect();
                assert!(names.contains(&"amount"), "{} lacks amount", pattern.name);
                assert!(names.contains(&"description"), "{} lacks description", pattern.name);
            }
        }
    }

    #[test]
    fn test_implied_types() {
        for language in Language::ALL {
            let table = table(language);
            assert_eq!(table.simple.implied_type, None);
            assert!(table
                .income
                .iter()
                .all(|p| p.implied_type == Some(TransactionType::Income)));
            assert!(table
                .expense
                .iter()
                .all(|p| p.implied_type == Some(TransactionType::Expense)));
        }
    }

    #[test]
    fn test_code_mixed_tables_end_with_english() {
        let hindi = table(Language::Hindi);
        assert_eq!(hindi.income.first().map(|p| p.name), Some("add_income"));
        assert_eq!(hindi.income.last().map(|p| p.name), Some("amount_income"));
        assert_eq!(table(Language::English).income.len(), EN_INCOME.len());
    }

    #[test]
    fn test_simple_pattern() {
        let simple = &table(Language::English).simple;
        let m = simple.extract("50 rupees milk").unwrap();
        assert_eq!(m.amount, 50.0);
        assert_eq!(m.description, "milk");

        let m = simple.extract("₹120 for vegetables").unwrap();
        assert_eq!(m.amount, 120.0);
        assert_eq!(m.description, "vegetables");

        assert!(simple.extract("milk 50").is_none());
        assert!(simple.extract("50").is_none());
    }

    #[test]
    fn test_simple_pattern_hindi_linker() {
        let simple = &table(Language::Hindi).simple;
        let m = simple.extract("50 रुपये का दूध").unwrap();
        assert_eq!(m.amount, 50.0);
        assert_eq!(m.description, "दूध");
    }

    #[test]
    fn test_description_first_template_groups() {
        let hindi = table(Language::Hindi);
        let m = transaction(&hindi.income, "item_sold_for_amount")
            .extract("दूध बेचा 50 रुपये में")
            .unwrap();
        assert_eq!(m.amount, 50.0);
        assert_eq!(m.description, "दूध");

        let m = transaction(&hindi.expense, "item_amount_bought")
            .extract("चावल 200 रुपये में खरीदा")
            .unwrap();
        assert_eq!(m.amount, 200.0);
        assert_eq!(m.description, "चावल");
    }

    #[test]
    fn test_amount_first_income_template_reachable() {
        let english = table(Language::English);
        let m = transaction(&english.income, "amount_income")
            .extract("500 income from consulting")
            .unwrap();
        assert_eq!(m.amount, 500.0);
        assert_eq!(m.description, "consulting");
    }

    #[test]
    fn test_missing_description_is_empty() {
        let english = table(Language::English);
        let m = transaction(&english.income, "add_income")
            .extract("add income 500")
            .unwrap();
        assert_eq!(m.amount, 500.0);
        assert_eq!(m.description, "");
    }

    #[test]
    fn test_quantity_prefix_skipped() {
        let english = table(Language::English);
        let m = transaction(&english.expense, "bought_for")
            .extract("bought 5 kg rice for 200")
            .unwrap();
        assert_eq!(m.amount, 200.0);
        assert_eq!(m.description, "rice");
    }

    #[test]
    fn test_trailing_detail_joins_description() {
        let english = table(Language::English);
        let m = transaction(&english.income, "sold_for")
            .extract("sold milk for 40 to ramesh")
            .unwrap();
        assert_eq!(m.amount, 40.0);
        assert_eq!(m.description, "milk to ramesh");

        let m = transaction(&english.expense, "purchased_for")
            .extract("purchased 2 bags sugar for 90 from the wholesaler.")
            .unwrap();
        assert_eq!(m.amount, 90.0);
        assert_eq!(m.description, "sugar from the wholesaler");

        let m = transaction(&english.expense, "bought_for")
            .extract("bought rice for 200")
            .unwrap();
        assert_eq!(m.description, "rice");
    }

    #[test]
    fn test_how_many_needs_stock_phrasing() {
        let english = table(Language::English);
        let product = |text: &str| english.stock.iter().find_map(|p| p.extract(text));
        assert_eq!(product("how many eggs in stock"), Some("eggs".to_string()));
        assert_eq!(product("how many rice bags are left?"), Some("rice bags".to_string()));
        assert_eq!(product("how many eggs"), Some("eggs".to_string()));
        assert_eq!(product("how many items did i sell today"), None);
    }

    #[test]
    fn test_malformed_amount_fails_pattern() {
        let simple = &table(Language::English).simple;
        assert!(simple.extract("٥٠ rupees milk").is_none());
    }

    #[test]
    fn test_income_keywords() {
        assert!(table(Language::English).has_income_keyword("milk sold"));
        assert!(!table(Language::English).has_income_keyword("milk"));
        assert!(!table(Language::English).has_income_keyword("wholesale milk"));
        assert!(table(Language::Hindi).has_income_keyword("दूध बेचा"));
        assert!(table(Language::Marathi).has_income_keyword("दूध विकले"));
    }

    #[test]
    fn test_query_pattern_resolves_vocabulary() {
        let english = table(Language::English);
        let result = english.query.iter().find_map(|p| p.extract("how much did i spend this month"));
        assert_eq!(result, Some((Some(Period::Month), Metric::Expenses)));
    }

    #[test]
    fn test_analytics_trigger_needs_both_words() {
        let analytics = &table(Language::English).analytics;
        assert!(analytics.is_match("show me the dashboard"));
        assert!(!analytics.is_match("dashboard"));
        assert!(!analytics.is_match("show me"));
    }
}
