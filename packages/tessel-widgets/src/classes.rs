/// Space-joins class names, dropping empty entries.
pub fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entries_are_dropped() {
        assert_eq!(join_classes(["", "red", " ", "ui"]), "red ui");
        assert_eq!(join_classes([""; 3]), "");
    }
}
