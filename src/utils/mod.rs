//! Some utility functions

use crate::todo::TaskRecord;

/// A debug utility that pretty-prints a todo list
pub fn print_todo_list(tasks: &[TaskRecord]) {
    if tasks.is_empty() {
        println!("    (no todos)");
    }
    for task in tasks {
        print_task(task);
    }
}

pub fn print_task(task: &TaskRecord) {
    println!("    {}", format_task(task));
}

/// One line describing a todo: its due date (if any), its text and its ID
pub fn format_task(task: &TaskRecord) -> String {
    let decoded = task.decoded();
    let date = decoded.date.as_deref().unwrap_or("          ");
    format!("{}  {}\t[{}]", date, decoded.text, task.id())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_task() {
        assert_eq!(format_task(&TaskRecord::new(1u64, "Buy milk||2024-03-05")), "2024-03-05  Buy milk\t[1]");
        assert_eq!(format_task(&TaskRecord::new(2u64, "No date task")), "            No date task\t[2]");
    }
}
