use super::*;
use crate::constants::header;

mod vary_accept {
    use super::*;

    #[test]
    fn should_contain_single_vary_accept_entry_when_called() {
        // Arrange & Act
        let headers = vary_accept();

        // Assert
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(header::VARY), Some(&header::ACCEPT.to_string()));
    }
}

mod merge_vary {
    use super::*;

    #[test]
    fn should_return_addition_given_no_existing_value() {
        // Arrange & Act
        let merged = merge_vary(None, header::ACCEPT);

        // Assert
        assert_eq!(merged, "Accept");
    }

    #[test]
    fn should_append_given_existing_value_lacks_addition() {
        // Arrange & Act
        let merged = merge_vary(Some("Origin"), header::ACCEPT);

        // Assert
        assert_eq!(merged, "Origin, Accept");
    }

    #[test]
    fn should_keep_first_spelling_given_case_insensitive_duplicate() {
        // Arrange & Act
        let merged = merge_vary(Some("ACCEPT, Origin"), "accept");

        // Assert
        assert_eq!(merged, "ACCEPT, Origin");
    }

    #[test]
    fn should_drop_empty_members_given_messy_existing_value() {
        // Arrange & Act
        let merged = merge_vary(Some(" Origin , ,  "), header::ACCEPT);

        // Assert
        assert_eq!(merged, "Origin, Accept");
    }

    #[test]
    fn should_deduplicate_existing_members_given_repeats() {
        // Arrange & Act
        let merged = merge_vary(Some("Origin, origin"), header::ACCEPT);

        // Assert
        assert_eq!(merged, "Origin, Accept");
    }
}
