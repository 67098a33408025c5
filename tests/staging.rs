use agentchat::staging::{FileStagingArea, StagedFile};

#[test]
fn test_files_keep_insertion_order() {
    let mut staging = FileStagingArea::new();
    staging.add_files([
        StagedFile::new("report.pdf", vec![1, 2, 3]),
        StagedFile::new("data.xlsx", vec![4, 5]),
    ]);
    staging.add_file(StagedFile::new("notes.txt", vec![6]));

    let names = staging.names();
    assert_eq!(names, vec!["report.pdf", "data.xlsx", "notes.txt"]);
    assert_eq!(staging.len(), 3);
}

#[test]
fn test_duplicate_names_are_retained() {
    let mut staging = FileStagingArea::new();
    staging.add_file(StagedFile::new("report.pdf", vec![1]));
    staging.add_file(StagedFile::new("report.pdf", vec![2]));

    assert_eq!(staging.len(), 2);
    assert_eq!(staging.files()[0].contents, vec![1]);
    assert_eq!(staging.files()[1].contents, vec![2]);
}

#[test]
fn test_clear_empties_the_area() {
    let mut staging = FileStagingArea::new();
    staging.add_file(StagedFile::new("report.pdf", vec![1]));
    staging.clear();

    assert!(staging.is_empty());
    assert!(staging.names().is_empty());
}

#[test]
fn test_take_hands_files_over_and_empties() {
    let mut staging = FileStagingArea::new();
    staging.add_file(StagedFile::new("a.txt", b"aaa".to_vec()));
    staging.add_file(StagedFile::new("b.txt", b"bbb".to_vec()));

    let taken = staging.take();
    assert_eq!(taken.len(), 2);
    assert_eq!(taken[0].name, "a.txt");
    assert!(staging.is_empty());
}
