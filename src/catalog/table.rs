//! Static language table.
//!
//! One row per code the classifier can emit: `(code, display name, script)`.
//! Script-variant codes (`-Latn`) describe a language written outside its
//! default script.

pub(super) const LANGUAGE_TABLE: &[(&str, &str, &str)] = &[
    ("af", "Afrikaans", "Latin"),
    ("ak", "Akan", "Latin"),
    ("am", "Amharic", "Ethiopic"),
    ("ar", "Arabic", "Arabic"),
    ("az", "Azerbaijani", "Latin"),
    ("be", "Belarusian", "Cyrillic"),
    ("bg", "Bulgarian", "Cyrillic"),
    ("bg-Latn", "Bulgarian", "Latin"),
    ("bn", "Bangla", "Bangla"),
    ("bs", "Bosnian", "Latin"),
    ("ca", "Catalan", "Latin"),
    ("ceb", "Cebuano", "Latin"),
    ("co", "Corsican", "Latin"),
    ("cs", "Czech", "Latin"),
    ("cy", "Welsh", "Latin"),
    ("da", "Danish", "Latin"),
    ("de", "German", "Latin"),
    ("el", "Greek", "Greek"),
    ("el-Latn", "Greek", "Latin"),
    ("en", "English", "Latin"),
    ("eo", "Esperanto", "Latin"),
    ("es", "Spanish", "Latin"),
    ("et", "Estonian", "Latin"),
    ("eu", "Basque", "Latin"),
    ("fa", "Persian", "Arabic"),
    ("fi", "Finnish", "Latin"),
    ("fil", "Filipino", "Latin"),
    ("fr", "French", "Latin"),
    ("fy", "Western Frisian", "Latin"),
    ("ga", "Irish", "Latin"),
    ("gd", "Scottish Gaelic", "Latin"),
    ("gl", "Galician", "Latin"),
    ("gu", "Gujarati", "Gujarati"),
    ("ha", "Hausa", "Latin"),
    ("haw", "Hawaiian", "Latin"),
    ("hi", "Hindi", "Devanagari"),
    ("hi-Latn", "Hindi", "Latin"),
    ("hmn", "Hmong", "Latin"),
    ("hr", "Croatian", "Latin"),
    ("ht", "Haitian Creole", "Latin"),
    ("hu", "Hungarian", "Latin"),
    ("hy", "Armenian", "Armenian"),
    ("id", "Indonesian", "Latin"),
    ("ig", "Igbo", "Latin"),
    ("is", "Icelandic", "Latin"),
    ("it", "Italian", "Latin"),
    ("iw", "Hebrew", "Hebrew"),
    ("ja", "Japanese", "Japanese"),
    ("ja-Latn", "Japanese", "Latin"),
    ("jv", "Javanese", "Latin"),
    ("ka", "Georgian", "Georgian"),
    ("kk", "Kazakh", "Cyrillic"),
    ("km", "Khmer", "Khmer"),
    ("kn", "Kannada", "Kannada"),
    ("ko", "Korean", "Korean"),
    ("ku", "Kurdish", "Latin"),
    ("ky", "Kyrgyz", "Cyrillic"),
    ("la", "Latin", "Latin"),
    ("lb", "Luxembourgish", "Latin"),
    ("lo", "Lao", "Lao"),
    ("lt", "Lithuanian", "Latin"),
    ("lv", "Latvian", "Latin"),
    ("mg", "Malagasy", "Latin"),
    ("mi", "Maori", "Latin"),
    ("mk", "Macedonian", "Cyrillic"),
    ("ml", "Malayalam", "Malayalam"),
    ("mn", "Mongolian", "Cyrillic"),
    ("mr", "Marathi", "Devanagari"),
    ("ms", "Malay", "Latin"),
    ("mt", "Maltese", "Latin"),
    ("my", "Burmese", "Myanmar"),
    ("ne", "Nepali", "Devanagari"),
    ("nl", "Dutch", "Latin"),
    ("no", "Norwegian", "Latin"),
    ("ny", "Nyanja", "Latin"),
    ("or", "Odia", "Odia"),
    ("pa", "Punjabi", "Gurmukhi"),
    ("pl", "Polish", "Latin"),
    ("ps", "Pashto", "Arabic"),
    ("pt", "Portuguese", "Latin"),
    ("ro", "Romanian", "Latin"),
    ("ru", "Russian", "Cyrillic"),
    ("ru-Latn", "Russian", "Latin"),
    ("sd", "Sindhi", "Arabic"),
    ("si", "Sinhala", "Sinhala"),
    ("sk", "Slovak", "Latin"),
    ("sl", "Slovenian", "Latin"),
    ("sm", "Samoan", "Latin"),
    ("sn", "Shona", "Latin"),
    ("so", "Somali", "Latin"),
    ("sq", "Albanian", "Latin"),
    ("sr", "Serbian", "Cyrillic"),
    ("st", "Southern Sotho", "Latin"),
    ("su", "Sundanese", "Latin"),
    ("sv", "Swedish", "Latin"),
    ("sw", "Swahili", "Latin"),
    ("ta", "Tamil", "Tamil"),
    ("te", "Telugu", "Telugu"),
    ("tg", "Tajik", "Cyrillic"),
    ("th", "Thai", "Thai"),
    ("tk", "Turkmen", "Latin"),
    ("tr", "Turkish", "Latin"),
    ("uk", "Ukrainian", "Cyrillic"),
    ("ur", "Urdu", "Arabic"),
    ("uz", "Uzbek", "Latin"),
    ("vi", "Vietnamese", "Latin"),
    ("xh", "Xhosa", "Latin"),
    ("yi", "Yiddish", "Hebrew"),
    ("yo", "Yoruba", "Latin"),
    ("zh", "Chinese", "Han"),
    ("zh-Latn", "Chinese", "Latin"),
    ("zu", "Zulu", "Latin"),
    ("und", "Undefined", "Undefined"),
];
