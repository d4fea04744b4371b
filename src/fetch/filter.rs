//! Client-side filters over already-loaded data

/// Option meaning "no filter".
pub const ALL: &str = "all";

/// `all` followed by each distinct value in first-seen order.
pub fn options<'a, T: 'a, I>(items: &'a [T], values: impl Fn(&'a T) -> I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = vec![ALL.to_string()];
    for value in items.iter().flat_map(values) {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}

/// Items matching the selected option; `all` keeps everything.
pub fn apply<'a, T>(
    items: &'a [T],
    selected: &str,
    matches: impl Fn(&T, &str) -> bool,
) -> Vec<&'a T> {
    if selected == ALL {
        return items.iter().collect();
    }
    items.iter().filter(|item| matches(item, selected)).collect()
}

/// Number of items per option, with the `all` option counting every item.
pub fn counts<T>(
    items: &[T],
    options: &[&str],
    matches: impl Fn(&T, &str) -> bool,
) -> Vec<(String, usize)> {
    options
        .iter()
        .map(|option| {
            let count = if *option == ALL {
                items.len()
            } else {
                items.iter().filter(|item| matches(item, option)).count()
            };
            (option.to_string(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Post {
        tags: Vec<String>,
    }

    fn post(tags: &[&str]) -> Post {
        Post {
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn posts() -> Vec<Post> {
        vec![post(&["rust", "wasm"]), post(&["ml"]), post(&["wasm", "ml"])]
    }

    #[test]
    fn test_options_keep_first_seen_order() {
        let posts = posts();
        let tags = options(&posts, |p| p.tags.iter().map(String::as_str));
        assert_eq!(tags, vec!["all", "rust", "wasm", "ml"]);
    }

    #[test]
    fn test_apply_and_counts() {
        let posts = posts();
        let has_tag = |p: &Post, tag: &str| p.tags.iter().any(|t| t == tag);

        assert_eq!(apply(&posts, ALL, has_tag).len(), 3);
        assert_eq!(apply(&posts, "wasm", has_tag).len(), 2);
        assert!(apply(&posts, "go", has_tag).is_empty());

        assert_eq!(
            counts(&posts, &["all", "ml", "go"], has_tag),
            vec![("all".to_string(), 3), ("ml".to_string(), 2), ("go".to_string(), 0)]
        );
    }
}
