//! Comic commands: list, generate, like.

use std::path::Path;

use anyhow::Result;
use koma_client::{Comic, ComicLibrary, View};

use super::build_api;

/// List comics for a view.
pub async fn list(view: View, output_json: bool, config_path: &Path) -> Result<()> {
    let mut library = ComicLibrary::new(build_api(config_path)?, view);
    library.refresh().await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(library.comics())?);
    } else {
        print_table(library.comics());
    }
    Ok(())
}

/// Generate a comic from a prompt. The library list is re-fetched so the
/// creation is immediately visible.
pub async fn generate(prompt: &str, output_json: bool, config_path: &Path) -> Result<()> {
    let mut library = ComicLibrary::new(build_api(config_path)?, View::Library);
    let generated = library.generate(prompt).await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    println!("Comic generated.");
    println!("  Image: {}", generated.image_url);
    for (i, panel) in generated.panel_prompts.iter().enumerate() {
        println!("  Panel {}: {}", i + 1, panel);
    }
    println!("Your library now holds {} comic(s).", library.comics().len());
    Ok(())
}

/// Like or unlike a comic found in the given view.
pub async fn like(comic_id: &str, view: View, config_path: &Path) -> Result<()> {
    let mut library = ComicLibrary::new(build_api(config_path)?, view);
    library.refresh().await?;
    library.toggle_like(comic_id).await?;

    match library.comics().iter().find(|c| c.id == comic_id) {
        Some(comic) if comic.is_liked => {
            println!("Liked {} ({} likes).", comic.id, comic.likes);
        }
        Some(comic) => {
            println!("Unliked {} ({} likes).", comic.id, comic.likes);
        }
        // The comic wasn't in the fetched view; the server still toggled.
        None => println!("Like toggled for {}.", comic_id),
    }
    Ok(())
}

fn print_table(comics: &[Comic]) {
    if comics.is_empty() {
        println!("No comics here yet.");
        return;
    }

    println!("{:24} {:>5} {:5} {}", "ID", "LIKES", "LIKED", "PROMPT");
    for comic in comics {
        println!(
            "{:24} {:>5} {:5} {}",
            comic.id,
            comic.likes,
            if comic.is_liked { "yes" } else { "" },
            truncate(&comic.prompt, 48),
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("a ninja story", 48), "a ninja story");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        let long = "x".repeat(60);
        let cut = truncate(&long, 48);
        assert_eq!(cut.chars().count(), 48);
        assert!(cut.ends_with("..."));
    }
}
