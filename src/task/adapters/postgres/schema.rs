//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task title.
        title -> Text,
        /// Optional long description.
        long_description -> Nullable<Text>,
        /// Planned completion date.
        planned_completion_date -> Date,
        /// Completion flag.
        completed -> Bool,
        /// Date the task was finalized.
        completion_date -> Nullable<Date>,
    }
}
