table! {
    translations (id) {
        id -> Integer,
        name -> Text,
        abbreviation -> Text,
        language -> Text,
    }
}

table! {
    books (id) {
        id -> Integer,
        name -> Text,
        testament -> Text,
    }
}

table! {
    verses (id) {
        id -> Integer,
        translation_id -> Integer,
        book_id -> Integer,
        chapter -> Integer,
        verse -> Integer,
        text -> Text,
    }
}

joinable!(verses -> translations (translation_id));
joinable!(verses -> books (book_id));

allow_tables_to_appear_in_same_query!(books, translations, verses);
