//! Post command handlers

use anyhow::{Context, Result};

use betula_core::{Category, Post, Store, Visibility};

use crate::output::Output;

/// Build the post described by the `add` arguments
pub fn build_post(
    url: String,
    title: String,
    description: String,
    private: bool,
    categories: Vec<String>,
) -> Post {
    let mut post = Post::new(url, title);
    post.set_description(description);
    post.set_visibility(Visibility::from_private_flag(private));
    post.set_categories(categories.into_iter().map(Category::new).collect());
    post
}

/// Save a new post
pub fn add(store: &mut Store, post: Post, output: &Output) -> Result<Post> {
    let post = store.create_post(post).context("Failed to create post")?;

    if let Some(id) = post.id {
        output.success(&format!("Created post: {}", id));
    }
    output.print_post(&post)?;

    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_build_post_defaults_to_public() {
        let post = build_post(
            "https://example.com".to_string(),
            "Example".to_string(),
            String::new(),
            false,
            Vec::new(),
        );

        assert_eq!(post.visibility, Visibility::Public);
        assert!(post.description.is_empty());
        assert!(post.categories.is_empty());
        assert!(post.id.is_none());
    }

    #[test]
    fn test_build_post_private_with_categories() {
        let post = build_post(
            "https://example.com".to_string(),
            "Example".to_string(),
            "Notes".to_string(),
            true,
            vec!["tech".to_string(), "tech".to_string()],
        );

        assert_eq!(post.visibility, Visibility::Private);
        assert_eq!(post.description, "Notes");
        assert_eq!(
            post.categories,
            vec![Category::new("tech"), Category::new("tech")]
        );
    }

    #[test]
    fn test_add_saves_post() {
        let mut store = Store::open_in_memory().unwrap();
        let output = Output::new(OutputFormat::Quiet);

        let post = build_post(
            "https://example.com".to_string(),
            "Example".to_string(),
            String::new(),
            false,
            vec!["tech".to_string()],
        );
        let saved = add(&mut store, post, &output).unwrap();

        let stored = store.get_post(saved.id.unwrap()).unwrap().unwrap();
        assert_eq!(stored.title, "Example");
        assert_eq!(stored.categories, vec![Category::new("tech")]);
    }

    #[test]
    fn test_add_reports_failure() {
        let mut store = Store::open_in_memory().unwrap();
        let output = Output::new(OutputFormat::Quiet);

        let post = build_post(
            "https://example.com".to_string(),
            "Example".to_string(),
            String::new(),
            false,
            vec![String::new()],
        );
        let err = add(&mut store, post, &output).unwrap_err();

        assert!(err.to_string().contains("Failed to create post"));
        assert_eq!(store.post_count().unwrap(), 1);
    }
}
