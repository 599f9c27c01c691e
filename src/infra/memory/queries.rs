use std::cmp::Ordering;

use feruca::Collator;

use crate::domain::entities::dataset::{PageResult, SortDirection, SortSpec, ViewState};
use crate::domain::entities::row::{CellValue, Row};

/// Rows whose id or any field contains `search_term`, ignoring case.
pub fn filter_rows<'a>(rows: &'a [Row], search_term: &str) -> Vec<&'a Row> {
    let needle = search_term.to_lowercase();
    rows.iter().filter(|row| row.contains_text(&needle)).collect()
}

pub fn sort_rows(rows: &mut [&Row], sort: &SortSpec) {
    let mut collator = Collator::default();
    rows.sort_by(|a, b| {
        let ordering = compare_cells(
            &mut collator,
            a.get(&sort.column_id),
            b.get(&sort.column_id),
        );
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Total order over cell values: numbers first, compared numerically, then
/// text in collation order. A missing value sorts as empty text.
pub fn compare_cells(
    collator: &mut Collator,
    a: Option<&CellValue>,
    b: Option<&CellValue>,
) -> Ordering {
    match (a, b) {
        (Some(CellValue::Number(a)), Some(CellValue::Number(b))) => a.total_cmp(b),
        (Some(CellValue::Number(_)), _) => Ordering::Less,
        (_, Some(CellValue::Number(_))) => Ordering::Greater,
        _ => {
            let a = a.map(ToString::to_string).unwrap_or_default();
            let b = b.map(ToString::to_string).unwrap_or_default();
            collate(collator, &a, &b)
        }
    }
}

/// Unicode collation (CLDR root), which already puts lowercase before
/// uppercase; remaining ties fall back to code points, lowercase first.
pub fn collate(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| b.cmp(a))
}

pub fn paginate<'a>(rows: &[&'a Row], page: usize, page_size: usize) -> Vec<&'a Row> {
    let page_size = page_size.max(1);
    let start = page.saturating_mul(page_size);
    if start >= rows.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(rows.len());
    rows[start..end].to_vec()
}

/// Filter, sort, then slice one page. Pure function of its inputs.
pub fn query_page<'a>(rows: &'a [Row], view: &ViewState) -> PageResult<'a> {
    let mut matched = filter_rows(rows, &view.search_term);
    if let Some(sort) = &view.sort {
        sort_rows(&mut matched, sort);
    }
    let page_size = view.page_size.max(1);

    PageResult {
        rows: paginate(&matched, view.page, page_size),
        total_rows: matched.len(),
        page: view.page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Row> {
        vec![
            Row::new("1").with("name", "Alice").with("city", "Paris").with("age", 30),
            Row::new("2").with("name", "bob").with("city", "Tokyo").with("age", 9),
            Row::new("3").with("name", "Cara").with("city", "Boston").with("age", 41),
            Row::new("4").with("name", "Dylan").with("city", "Berlin").with("age", 25),
        ]
    }

    fn names(rows: &[&Row]) -> Vec<String> {
        rows.iter()
            .map(|row| row.get("name").map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn empty_search_keeps_every_row() {
        let rows = people();

        assert_eq!(filter_rows(&rows, "").len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let rows = people();

        assert_eq!(names(&filter_rows(&rows, "TOK")), vec!["bob"]);
        assert_eq!(names(&filter_rows(&rows, "b")), vec!["bob", "Cara", "Dylan"]);
        assert_eq!(names(&filter_rows(&rows, "41")), vec!["Cara"]);
    }

    #[test]
    fn numeric_column_sorts_by_value_not_text() {
        let rows = people();
        let mut matched = filter_rows(&rows, "");

        sort_rows(&mut matched, &SortSpec::asc("age"));

        assert_eq!(names(&matched), vec!["bob", "Dylan", "Alice", "Cara"]);
    }

    #[test]
    fn text_column_sorts_ignoring_case() {
        let rows = people();
        let mut matched = filter_rows(&rows, "");

        sort_rows(&mut matched, &SortSpec::asc("name"));
        assert_eq!(names(&matched), vec!["Alice", "bob", "Cara", "Dylan"]);

        sort_rows(&mut matched, &SortSpec::desc("name"));
        assert_eq!(names(&matched), vec!["Dylan", "Cara", "bob", "Alice"]);
    }

    #[test]
    fn collate_puts_lowercase_first_on_case_ties() {
        let mut collator = Collator::default();

        assert_eq!(collate(&mut collator, "apple", "Apple"), Ordering::Less);
        assert_eq!(collate(&mut collator, "Apple", "banana"), Ordering::Less);
        assert_eq!(collate(&mut collator, "same", "same"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let rows = vec![
            Row::new("1").with("name", "Zoe"),
            Row::new("2").with("name", "Émile"),
            Row::new("3").with("name", "Adam"),
        ];
        let mut matched = filter_rows(&rows, "");

        sort_rows(&mut matched, &SortSpec::asc("name"));

        assert_eq!(names(&matched), vec!["Adam", "Émile", "Zoe"]);
    }

    #[test]
    fn numbers_rank_before_text() {
        let mut collator = Collator::default();

        let ordering = compare_cells(
            &mut collator,
            Some(&CellValue::from(10)),
            Some(&CellValue::from("9")),
        );

        assert_eq!(ordering, Ordering::Less);
    }

    #[test]
    fn missing_values_sort_as_empty_text() {
        let mut collator = Collator::default();

        assert_eq!(
            compare_cells(&mut collator, None, Some(&CellValue::from("a"))),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(&mut collator, None, Some(&CellValue::from(1))),
            Ordering::Greater
        );
    }

    #[test]
    fn mixed_column_sorts_without_panicking() {
        let rows: Vec<Row> = (0..200)
            .map(|idx| {
                let row = Row::new(idx.to_string());
                if idx % 2 == 0 {
                    row.with("v", idx as i64)
                } else {
                    row.with("v", idx.to_string())
                }
            })
            .collect();
        let mut matched = filter_rows(&rows, "");

        sort_rows(&mut matched, &SortSpec::asc("v"));

        let (numbers, texts) = matched.split_at(100);
        assert!(numbers
            .iter()
            .all(|row| matches!(row.get("v"), Some(CellValue::Number(_)))));
        assert_eq!(numbers[0].id, "0");
        assert_eq!(numbers[99].id, "198");
        assert!(texts
            .windows(2)
            .all(|pair| pair[0].get("v").map(ToString::to_string) <= pair[1].get("v").map(ToString::to_string)));

        sort_rows(&mut matched, &SortSpec::desc("v"));
        assert!(matches!(matched[0].get("v"), Some(CellValue::Text(_))));
        assert_eq!(matched[199].id, "0");
    }

    #[test]
    fn query_page_slices_after_filter_and_sort() {
        let rows = people();
        let view = ViewState {
            search_term: String::new(),
            sort: Some(SortSpec::desc("age")),
            page: 1,
            page_size: 3,
        };

        let page = query_page(&rows, &view);

        assert_eq!(page.total_rows, 4);
        assert_eq!(page.page_count(), 2);
        assert_eq!(names(&page.rows), vec!["bob"]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let rows = people();
        let view = ViewState {
            page: 5,
            ..ViewState::new(10)
        };

        let page = query_page(&rows, &view);

        assert!(page.rows.is_empty());
        assert_eq!(page.total_rows, 4);
    }
}
