//! Diesel schema for task persistence.

diesel::table! {
    /// Task documents owned by users.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task name.
        task_name -> Text,
        /// Task description.
        description -> Text,
        /// Completion flag.
        is_done -> Bool,
        /// Priority in `1..=5`.
        priority -> Int2,
        /// Ordered tags.
        tags -> Array<Text>,
        /// Owning user identifier.
        user_id -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
