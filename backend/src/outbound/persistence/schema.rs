//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts.
    users (id) {
        id -> Uuid,
        /// Unique, case-sensitive login handle.
        username -> Varchar,
        /// PHC-format Argon2id hash.
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Cats, each owned by one user.
    cats (id) {
        id -> Int4,
        /// Owning user; cascades on user deletion.
        user_id -> Uuid,
        name -> Varchar,
        breed -> Varchar,
        description -> Varchar,
        age -> Int4,
    }
}

diesel::table! {
    /// Toys shared by every user.
    toys (id) {
        id -> Int4,
        name -> Varchar,
        color -> Varchar,
    }
}

diesel::table! {
    /// Feeding log; cascades on cat deletion.
    feedings (id) {
        id -> Int4,
        cat_id -> Int4,
        date -> Date,
        /// One of `B`, `L` or `D`.
        meal -> Varchar,
    }
}

diesel::table! {
    /// Photo URLs; cascades on cat deletion.
    photos (id) {
        id -> Int4,
        cat_id -> Int4,
        url -> Varchar,
    }
}

diesel::table! {
    /// Cat/toy association set.
    cats_toys (cat_id, toy_id) {
        cat_id -> Int4,
        toy_id -> Int4,
    }
}

diesel::joinable!(cats -> users (user_id));
diesel::joinable!(feedings -> cats (cat_id));
diesel::joinable!(photos -> cats (cat_id));
diesel::joinable!(cats_toys -> cats (cat_id));
diesel::joinable!(cats_toys -> toys (toy_id));

diesel::allow_tables_to_appear_in_same_query!(users, cats, toys, feedings, photos, cats_toys);
