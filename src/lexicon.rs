//! Word-level English → Urdu substitution table.
//!
//! The table is built once at startup and shared read-only (`Arc<Lexicon>`)
//! between all in-flight requests. Keys are stored lowercased so lookups are
//! case-insensitive on the key side; values are returned verbatim. An empty
//! value means the token is elided.

use std::collections::HashMap;

/// Built-in English → Urdu entries.
const URDU_ENTRIES: &[(&str, &str)] = &[
    ("this", "یہ"),
    ("is", "ہے"),
    ("a", ""),
    ("an", ""),
    ("the", ""),
    ("and", "اور"),
    ("or", "یا"),
    ("in", "میں"),
    ("on", "پر"),
    ("at", "پر"),
    ("to", "تک"),
    ("from", "سے"),
    ("for", "کے لیے"),
    ("with", "کے ساتھ"),
    ("of", "کا"),
    ("by", "کی طرف سے"),
    ("it", "یہ"),
    ("as", "کے طور پر"),
    ("that", "وہ"),
    ("be", "ہونا"),
    ("was", "تھا"),
    ("are", "ہیں"),
    ("will", "ہوگا"),
    ("can", "سکتا ہے"),
    ("blog", "بلاگ"),
    ("article", "مضمون"),
    ("guide", "رہنما"),
    ("tutorial", "سبق"),
    ("content", "مواد"),
    ("summary", "خلاصہ"),
    ("introduction", "تعارف"),
    ("conclusion", "نتیجہ"),
    ("step", "قدم"),
    ("steps", "اقدامات"),
    ("tips", "مشورے"),
    ("tricks", "چالیں"),
    ("read", "پڑھیں"),
    ("write", "لکھیں"),
    ("start", "شروع کریں"),
    ("get", "حاصل کریں"),
    ("started", "شروع کیا"),
    ("check", "چیک کریں"),
    ("click", "کلک کریں"),
    ("link", "لنک"),
    ("code", "کوڈ"),
    ("project", "منصوبہ"),
    ("setup", "ترتیب دیں"),
    ("install", "انسٹال کریں"),
    ("build", "بنائیں"),
    ("create", "تخلیق کریں"),
    ("develop", "ترقی دیں"),
    ("run", "چلائیں"),
    ("test", "ٹیسٹ کریں"),
    ("debug", "ڈی بگ کریں"),
    ("function", "فنکشن"),
    ("variable", "ویری ایبل"),
    ("logic", "منطق"),
    ("error", "خرابی"),
    ("fix", "درست کریں"),
    ("script", "سکرپٹ"),
    ("web", "ویب"),
    ("application", "ایپلیکیشن"),
    ("website", "ویب سائٹ"),
    ("frontend", "فرنٹ اینڈ"),
    ("backend", "بیک اینڈ"),
    ("database", "ڈیٹابیس"),
    ("api", "اے پی آئی"),
    ("server", "سرور"),
    ("client", "کلائنٹ"),
    ("platform", "پلیٹ فارم"),
    ("framework", "فریم ورک"),
    ("tool", "اوزار"),
    ("library", "لائبریری"),
    ("javascript", "جاوا اسکرپٹ"),
    ("typescript", "ٹائپ اسکرپٹ"),
    ("react", "ری ایکٹ"),
    ("next", "نیکسٹ"),
    ("node", "نوڈ"),
    ("express", "ایکسپریس"),
    ("mongo", "مونگو"),
    ("mysql", "مائی ایس کیو ایل"),
    ("html", "ایچ ٹی ایم ایل"),
    ("css", "سی ایس ایس"),
    ("deploy", "ڈپلائے کریں"),
    ("host", "میزبانی کریں"),
    ("vercel", "ورسل"),
    ("netlify", "نیٹ لائفائی"),
    ("cloud", "کلاؤڈ"),
    ("serverless", "سرور کے بغیر"),
    ("design", "ڈیزائن"),
    ("style", "انداز"),
    ("layout", "لے آؤٹ"),
    ("user", "صارف"),
    ("interface", "انٹرفیس"),
    ("experience", "تجربہ"),
    ("free", "مفت"),
    ("open", "کھلا"),
    ("source", "ماخذ"),
    ("fast", "تیز"),
    ("easy", "آسان"),
    ("simple", "سادہ"),
    ("advanced", "اعلی سطحی"),
    ("secure", "محفوظ"),
    ("powerful", "طاقتور"),
    ("now", "اب"),
    ("today", "آج"),
    ("soon", "جلد"),
    ("before", "پہلے"),
    ("after", "بعد"),
    ("learn", "سیکھیں"),
    ("explore", "دریافت کریں"),
    ("improve", "بہتر بنائیں"),
    ("finish", "مکمل کریں"),
    ("understand", "سمجھیں"),
    ("know", "جانیں"),
    ("use", "استعمال کریں"),
    ("help", "مدد کریں"),
];

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Build a lexicon from `(source, target)` pairs. Source keys are
    /// lowercased; when two keys collide after lowercasing the first wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (key, value) in pairs {
            entries
                .entry(key.as_ref().to_lowercase())
                .or_insert_with(|| value.into());
        }
        Self { entries }
    }

    /// The built-in English → Urdu table.
    pub fn urdu() -> Self {
        Self::from_pairs(URDU_ENTRIES.iter().copied())
    }

    /// Look up a token, ignoring its case.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.entries.get(&token.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = Lexicon::from_pairs([("blog", "بلاگ")]);
        assert_eq!(lexicon.lookup("blog"), Some("بلاگ"));
        assert_eq!(lexicon.lookup("Blog"), Some("بلاگ"));
        assert_eq!(lexicon.lookup("BLOG"), Some("بلاگ"));
        assert_eq!(lexicon.lookup("blogs"), None);
    }

    #[test]
    fn test_keys_are_lowercased_on_build() {
        let lexicon = Lexicon::from_pairs([("Start", "شروع کریں")]);
        assert_eq!(lexicon.lookup("start"), Some("شروع کریں"));
    }

    #[test]
    fn test_first_key_wins_on_collision() {
        let lexicon = Lexicon::from_pairs([("web", "first"), ("WEB", "second")]);
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.lookup("web"), Some("first"));
    }

    #[test]
    fn test_urdu_table() {
        let lexicon = Lexicon::urdu();
        assert_eq!(lexicon.len(), URDU_ENTRIES.len());
        assert_eq!(lexicon.lookup("this"), Some("یہ"));
        assert_eq!(lexicon.lookup("for"), Some("کے لیے"));
        // articles are elided rather than missing
        assert_eq!(lexicon.lookup("the"), Some(""));
        assert_eq!(lexicon.lookup("a"), Some(""));
        assert_eq!(lexicon.lookup("rust"), None);
    }
}
