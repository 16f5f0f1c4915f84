use super::load_config;

/// Validate a configuration file and summarize it.
pub fn check_config(path: &str) {
    let config = load_config(path);
    let comments = config.comments();
    println!("Configuration '{path}' is valid:");
    println!("  Reserved words: {}", config.reserved_words().len());
    println!("  Operators:      {}", config.operators().len());
    println!("  Punctuation:    {}", config.punctuation().len());
    println!("  Grouping:       {}", config.grouping().len());
    println!(
        "  Comments:       {}  {} ... {}",
        comments.line(),
        comments.block_start(),
        comments.block_end()
    );
}
