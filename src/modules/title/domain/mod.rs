pub mod title_cleaner;

pub use title_cleaner::{
    RemoveJunkKeywordsTransform, TitleCleaner, TitleTransformation,
    TrimTrailingSeparatorTransform, TruncateSuffixTransform,
};
