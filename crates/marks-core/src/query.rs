//! Pure filter/search over the bookmark list.
//!
//! Order is preserved (stable filter, not a sort); there is no ranking and
//! no fuzzy matching.

use crate::bookmark::Bookmark;

/// `true` when `bookmark` survives the combined category + search filter.
///
/// Category compares exactly and case-sensitively when present and
/// non-empty. The search term matches case-insensitively as a substring of
/// the title or the url; an empty term matches everything.
#[must_use]
pub fn matches(bookmark: &Bookmark, category: Option<&str>, term: &str) -> bool {
    if let Some(wanted) = category {
        if !wanted.is_empty() && bookmark.category != wanted {
            return false;
        }
    }
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    bookmark.title.to_lowercase().contains(&needle)
        || bookmark.url.to_lowercase().contains(&needle)
}

/// The filtered view: every bookmark in `all` passing [`matches`], in order.
#[must_use]
pub fn view<'a>(all: &'a [Bookmark], category: Option<&str>, term: &str) -> Vec<&'a Bookmark> {
    all.iter()
        .filter(|bookmark| matches(bookmark, category, term))
        .collect()
}

/// Positions (into `all`) of the bookmarks [`view`] would keep.
///
/// Row N of the rendered view corresponds to `all[visible_indices(..)[N]]`;
/// the delete handler resolves the cursor through this mapping so it always
/// removes the entry the user is pointing at, filtered or not.
#[must_use]
pub fn visible_indices(all: &[Bookmark], category: Option<&str>, term: &str) -> Vec<usize> {
    all.iter()
        .enumerate()
        .filter_map(|(idx, bookmark)| matches(bookmark, category, term).then_some(idx))
        .collect()
}

/// Sorted, deduplicated non-empty categories present in `all`.
#[must_use]
pub fn categories(all: &[Bookmark]) -> Vec<String> {
    let mut out: Vec<String> = all
        .iter()
        .map(|bookmark| bookmark.category.clone())
        .filter(|category| !category.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Bookmark> {
        vec![
            Bookmark::new("T1", "http://a", "work"),
            Bookmark::new("T2", "https://b", "home"),
            Bookmark::new("T3", "https://c", "work"),
        ]
    }

    #[test]
    fn category_filter_is_exact_and_case_sensitive() {
        let all = sample();
        let work = view(&all, Some("work"), "");
        assert_eq!(work.len(), 2);
        assert_eq!(work[0].title, "T1");
        assert_eq!(work[1].title, "T3");

        assert!(view(&all, Some("Work"), "").is_empty());
        assert!(view(&all, Some("wor"), "").is_empty());
    }

    #[test]
    fn empty_category_means_no_filter() {
        let all = sample();
        assert_eq!(view(&all, None, "").len(), 3);
        assert_eq!(view(&all, Some(""), "").len(), 3);
    }

    #[test]
    fn search_matches_title_or_url_case_insensitively() {
        let all = sample();
        let hits = view(&all, None, "t1");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "T1");

        // url substring
        let hits = view(&all, None, "B");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "T2");
    }

    #[test]
    fn empty_term_matches_everything() {
        let all = sample();
        assert_eq!(view(&all, None, "").len(), all.len());
    }

    #[test]
    fn filters_combine() {
        let all = sample();
        let hits = view(&all, Some("work"), "c");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "T3");
    }

    #[test]
    fn view_is_idempotent_over_category() {
        let all = sample();
        let once: Vec<Bookmark> = view(&all, Some("work"), "")
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Bookmark> = view(&once, Some("work"), "")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn order_is_preserved() {
        let all = sample();
        assert_eq!(visible_indices(&all, Some("work"), ""), vec![0, 2]);
        assert_eq!(visible_indices(&all, None, "https"), vec![1, 2]);
        assert_eq!(visible_indices(&all, None, ""), vec![0, 1, 2]);
    }

    #[test]
    fn categories_are_sorted_and_deduplicated() {
        let mut all = sample();
        all.push(Bookmark::new("T4", "http://d", ""));
        assert_eq!(categories(&all), vec!["home".to_owned(), "work".to_owned()]);
    }

    #[test]
    fn categories_of_empty_list() {
        assert!(categories(&[]).is_empty());
    }
}
