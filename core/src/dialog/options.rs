//! Options for Dialog v1.

use chrono::NaiveDateTime;

use super::model::{DialogContent, NameValue};
use crate::options::request_options;

request_options! {
    pub struct ListDialogsOptions => ListDialogsOptionsBuilder {
        required {}
        optional {}
        lists {}
    }
}

request_options! {
    /// Upload a new dialog file (XML, JSON or encrypted).
    pub struct CreateDialogOptions => CreateDialogOptionsBuilder {
        required { name: String, file: Vec<u8> }
        optional { filename: String }
        lists {}
    }
}

request_options! {
    pub struct UpdateDialogOptions => UpdateDialogOptionsBuilder {
        required { dialog_id: String, file: Vec<u8> }
        optional { filename: String }
        lists {}
    }
}

request_options! {
    pub struct DeleteDialogOptions => DeleteDialogOptionsBuilder {
        required { dialog_id: String }
        optional {}
        lists {}
    }
}

request_options! {
    pub struct GetContentOptions => GetContentOptionsBuilder {
        required { dialog_id: String }
        optional {}
        lists {}
    }
}

request_options! {
    /// Replace the text of content nodes.
    pub struct UpdateContentOptions => UpdateContentOptionsBuilder {
        required { dialog_id: String }
        optional {}
        lists {}
        required_lists { content / add_content: DialogContent }
    }
}

request_options! {
    /// Send one line of input. Omitting `conversation_id` starts a new
    /// conversation.
    pub struct ConverseOptions => ConverseOptionsBuilder {
        required { dialog_id: String }
        optional {
            input: String,
            client_id: i64,
            conversation_id: i64,
        }
        lists {}
    }
}

request_options! {
    pub struct GetProfileOptions => GetProfileOptionsBuilder {
        required { dialog_id: String, client_id: i64 }
        optional {}
        lists {
            /// Only return these variables; all of them when empty.
            names / add_name: String,
        }
    }
}

request_options! {
    pub struct UpdateProfileOptions => UpdateProfileOptionsBuilder {
        required { dialog_id: String }
        optional { client_id: i64 }
        lists {}
        required_lists { name_values / add_name_value: NameValue }
    }
}

request_options! {
    /// Conversation history between two points in time.
    pub struct GetConversationDataOptions => GetConversationDataOptionsBuilder {
        required {
            dialog_id: String,
            date_from: NaiveDateTime,
            date_to: NaiveDateTime,
        }
        optional {
            offset: i64,
            limit: i64,
        }
        lists {}
    }
}
