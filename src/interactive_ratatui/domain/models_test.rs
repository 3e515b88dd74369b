#[cfg(test)]
mod tests {
    use super::super::models::*;

    #[test]
    fn test_fetch_status_default_is_idle() {
        assert_eq!(FetchStatus::default(), FetchStatus::Idle);
        assert!(!FetchStatus::Idle.is_loading());
        assert!(FetchStatus::Loading.is_loading());
        assert!(!FetchStatus::Succeeded.is_loading());
        assert!(!FetchStatus::Failed.is_loading());
    }
}
