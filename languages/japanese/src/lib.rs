pub mod explainer;
pub mod jisho;
pub mod prompt;
pub mod script;
pub mod translator;

pub use explainer::JapaneseExplainer;
pub use jisho::JishoClient;
pub use script::longest_japanese_run;
pub use translator::JapaneseTranslator;
