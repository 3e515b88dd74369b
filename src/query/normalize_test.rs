#[cfg(test)]
mod tests {
    use super::super::normalize::*;
    use super::super::request::{PageSize, SearchRequest, SortDirection, SortField, SortOrder};

    fn sorted_request(field: SortField, direction: SortDirection) -> SearchRequest {
        SearchRequest {
            query: "redux".to_string(),
            sort: Some(SortOrder { field, direction }),
            page_index: 3,
            page_size: PageSize::TwentyFive,
        }
    }

    #[test]
    fn test_blank_query_yields_reset_form() {
        let current = sorted_request(SortField::Stars, SortDirection::Desc);

        for raw in ["", "   ", "\t\n", " \u{3000} "] {
            let next = normalize_search(raw, &current);
            assert_eq!(next.query, "");
            assert_eq!(next.sort, None);
            assert_eq!(next.page_index, 0);
        }
    }

    #[test]
    fn test_search_trims_and_drops_sort_and_page() {
        let current = sorted_request(SortField::Forks, SortDirection::Asc);

        let next = normalize_search("  tokio runtime ", &current);

        assert_eq!(next.query, "tokio runtime");
        assert_eq!(next.sort_field(), None);
        assert_eq!(next.sort_direction(), None);
        assert_eq!(next.page_index, 0);
        assert_eq!(next.page_size, PageSize::TwentyFive);
    }

    #[test]
    fn test_sort_from_unsorted_starts_ascending() {
        let current = SearchRequest::new("redux");

        let next = normalize_sort(&current, SortField::Stars);

        assert_eq!(next.sort_field(), Some(SortField::Stars));
        assert_eq!(next.sort_direction(), Some(SortDirection::Asc));
    }

    #[test]
    fn test_sort_same_field_toggles() {
        let first = normalize_sort(&SearchRequest::new("redux"), SortField::Stars);
        let second = normalize_sort(&first, SortField::Stars);
        let third = normalize_sort(&second, SortField::Stars);

        assert_eq!(first.sort_direction(), Some(SortDirection::Asc));
        assert_eq!(second.sort_direction(), Some(SortDirection::Desc));
        assert_eq!(third.sort_direction(), Some(SortDirection::Asc));
    }

    #[test]
    fn test_sort_new_field_always_starts_ascending() {
        let current = sorted_request(SortField::Stars, SortDirection::Desc);
        let next = normalize_sort(&current, SortField::Forks);
        assert_eq!(
            next.sort,
            Some(SortOrder {
                field: SortField::Forks,
                direction: SortDirection::Asc
            })
        );

        let current = sorted_request(SortField::Stars, SortDirection::Asc);
        let next = normalize_sort(&current, SortField::Updated);
        assert_eq!(next.sort_direction(), Some(SortDirection::Asc));
    }

    #[test]
    fn test_sort_resets_page_and_keeps_query_and_size() {
        let current = sorted_request(SortField::Stars, SortDirection::Asc);

        let next = normalize_sort(&current, SortField::Stars);

        assert_eq!(next.page_index, 0);
        assert_eq!(next.query, "redux");
        assert_eq!(next.page_size, PageSize::TwentyFive);
    }

    #[test]
    fn test_page_change_only_touches_index() {
        let current = sorted_request(SortField::Updated, SortDirection::Desc);

        let next = normalize_page(&current, 7);

        assert_eq!(next.page_index, 7);
        assert_eq!(next.sort, current.sort);
        assert_eq!(next.query, current.query);
        assert_eq!(next.page_size, current.page_size);

        let back = normalize_page(&next, 0);
        assert_eq!(back.page_index, 0);
    }

    #[test]
    fn test_page_beyond_last_is_permitted() {
        let next = normalize_page(&SearchRequest::new("redux"), 10_000);
        assert_eq!(next.page_index, 10_000);
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let current = sorted_request(SortField::Forks, SortDirection::Desc);

        let next = normalize_page_size(&current, PageSize::Fifty);

        assert_eq!(next.page_size, PageSize::Fifty);
        assert_eq!(next.page_index, 0);
        assert_eq!(next.sort, current.sort);
        assert_eq!(next.query, "redux");
    }
}
