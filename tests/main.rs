use sort_test_tools::instantiate_sort_tests;

mod bubble {
    use super::*;

    type TestSort = textbook_sort_rs::stable::bubble::SortImpl;

    instantiate_sort_tests!(TestSort, stable);
}

mod insertion {
    use super::*;

    type TestSort = textbook_sort_rs::stable::insertion::SortImpl;

    instantiate_sort_tests!(TestSort, stable);
}

mod merge {
    use super::*;

    type TestSort = textbook_sort_rs::stable::merge::SortImpl;

    instantiate_sort_tests!(TestSort, stable);
}

mod quick {
    use super::*;

    type TestSort = textbook_sort_rs::unstable::quick::SortImpl;

    instantiate_sort_tests!(TestSort);
}

#[cfg(feature = "selection_sort")]
mod selection {
    use super::*;

    type TestSort = textbook_sort_rs::unstable::selection::SortImpl;

    instantiate_sort_tests!(TestSort);
}
