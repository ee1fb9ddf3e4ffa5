//! Diesel table definitions. Keep in step with `migrations/`.

diesel::table! {
    leads (id) {
        id -> Uuid,
        name -> Text,
        phone -> Text,
        created_at -> Timestamptz,
    }
}
