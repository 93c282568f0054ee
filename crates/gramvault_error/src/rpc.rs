//! Remote RPC failure classification.
//!
//! The remote platform reports failures as fixed string codes. This module
//! maps the catalogue of known codes to one-line, user-facing descriptions.
//! Unknown codes degrade to a generic message; the lookup never panics.

/// Fallback description for codes missing from the catalogue.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "The remote platform reported an unexpected error. Please try again.";

/// A classified remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoteFailure {
    status: u16,
    message: &'static str,
}

impl RemoteFailure {
    /// Numeric status class of the failure (400, 403, 420, 500).
    pub fn status(&self) -> u16 {
        self.status
    }

    /// One-line user-facing description.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Whether the catalogue recognized the code.
    pub fn is_known(&self) -> bool {
        self.message != GENERIC_FAILURE_MESSAGE
    }
}

/// Classify a remote RPC error code.
///
/// # Examples
///
/// ```
/// use gramvault_error::classify;
///
/// let failure = classify("CHANNEL_PRIVATE");
/// assert_eq!(failure.message(), "You haven't joined this channel/supergroup.");
///
/// let unknown = classify("UNKNOWN_CODE_XYZ");
/// assert!(!unknown.is_known());
/// ```
pub fn classify(code: &str) -> RemoteFailure {
    let (status, message): (u16, &'static str) = match code {
        "BOT_PAYMENTS_DISABLED" => (
            400,
            "Please enable bot payments in botfather before calling this method.",
        ),
        "BROADCAST_PUBLIC_VOTERS_FORBIDDEN" => {
            (400, "You can't forward polls with public voters.")
        }
        "BUTTON_DATA_INVALID" => (
            400,
            "The data of one or more of the buttons you provided is invalid.",
        ),
        "BUTTON_TYPE_INVALID" => (
            400,
            "The type of one or more of the buttons you provided is invalid.",
        ),
        "BUTTON_URL_INVALID" => (400, "Button URL invalid."),
        "CHANNEL_INVALID" => (400, "The provided channel is invalid."),
        "CHANNEL_PRIVATE" => (400, "You haven't joined this channel/supergroup."),
        "CHAT_ADMIN_REQUIRED" => (400, "You must be an admin in this chat to do this."),
        "CHAT_FORWARDS_RESTRICTED" => {
            (400, "You can't forward messages from a protected chat.")
        }
        "CHAT_RESTRICTED" => (
            400,
            "You can't send messages in this chat, you were restricted.",
        ),
        "CHAT_SEND_GIFS_FORBIDDEN" => (403, "You can't send gifs in this chat."),
        "CHAT_SEND_MEDIA_FORBIDDEN" => (403, "You can't send media in this chat."),
        "CHAT_SEND_POLL_FORBIDDEN" => (403, "You can't send polls in this chat."),
        "CHAT_SEND_STICKERS_FORBIDDEN" => (403, "You can't send stickers in this chat."),
        "CHAT_WRITE_FORBIDDEN" => (403, "You can't write in this chat."),
        "CURRENCY_TOTAL_AMOUNT_INVALID" => {
            (400, "The total amount of all prices is invalid.")
        }
        "EMOTICON_INVALID" => (400, "The specified emoji is invalid."),
        "EXTERNAL_URL_INVALID" => (400, "External URL invalid."),
        "FILE_PARTS_INVALID" => (400, "The number of file parts is invalid."),
        "FILE_PART_LENGTH_INVALID" => (400, "The length of a file part is invalid."),
        "FILE_REFERENCE_EMPTY" => (400, "An empty file reference was specified."),
        "FILE_REFERENCE_EXPIRED" => (
            400,
            "File reference expired, it must be refetched as described in the documentation.",
        ),
        "GAME_BOT_INVALID" => (400, "Bots can't send another bot's game."),
        "IMAGE_PROCESS_FAILED" => (
            400,
            "We're having trouble processing your image. Please try again!",
        ),
        "INPUT_USER_DEACTIVATED" => (
            400,
            "The user you're trying to interact with has deactivated their account. Please try again!",
        ),
        "MD5_CHECKSUM_INVALID" => (400, "The MD5 checksums do not match."),
        "MEDIA_CAPTION_TOO_LONG" => (400, "The caption is too long."),
        "MEDIA_EMPTY" => (400, "The provided media object is invalid."),
        "MEDIA_INVALID" => (400, "Media invalid."),
        "MSG_ID_INVALID" => (400, "Invalid message ID provided."),
        "PAYMENT_PROVIDER_INVALID" => (400, "The specified payment provider is invalid."),
        "PEER_ID_INVALID" => (400, "The provided peer id is invalid."),
        "PHOTO_EXT_INVALID" => (400, "The extension of the photo is invalid."),
        "PHOTO_INVALID_DIMENSIONS" => (400, "The photo dimensions are invalid."),
        "PHOTO_SAVE_FILE_INVALID" => (400, "Internal issues, try again later."),
        "POLL_ANSWERS_INVALID" => (400, "Invalid poll answers were provided."),
        "POLL_ANSWER_INVALID" => (400, "One of the poll answers is not acceptable."),
        "POLL_OPTION_DUPLICATE" => (400, "Duplicate poll options provided."),
        "POLL_OPTION_INVALID" => (400, "Invalid poll option provided."),
        "POLL_QUESTION_INVALID" => (400, "One of the poll questions is not acceptable."),
        "QUIZ_CORRECT_ANSWERS_EMPTY" => (400, "No correct quiz answer was specified."),
        "QUIZ_CORRECT_ANSWERS_TOO_MUCH" => (
            400,
            "You specified too many correct answers in a quiz, quizzes can only have one right answer!",
        ),
        "QUIZ_CORRECT_ANSWER_INVALID" => (
            400,
            "An invalid value was provided to the correct_answers field.",
        ),
        "QUIZ_MULTIPLE_INVALID" => (400, "Quizzes can't have the multiple_choice flag set!"),
        "RANDOM_ID_DUPLICATE" => (500, "You provided a random ID that was already used."),
        "REPLY_MARKUP_BUY_EMPTY" => (400, "Reply markup for buy button empty."),
        "REPLY_MARKUP_INVALID" => (400, "The provided reply markup is invalid."),
        "SCHEDULE_BOT_NOT_ALLOWED" => (400, "Bots cannot schedule messages."),
        "SCHEDULE_DATE_TOO_LATE" => (
            400,
            "You can't schedule a message this far in the future.",
        ),
        "SCHEDULE_TOO_MUCH" => (400, "There are too many scheduled messages."),
        "SEND_AS_PEER_INVALID" => (400, "You can't send messages as the specified peer."),
        "SLOWMODE_WAIT" => (
            420,
            "Slowmode is enabled in this chat: wait %d seconds before sending another message to this chat.",
        ),
        "TTL_MEDIA_INVALID" => (400, "Invalid media Time To Live was provided."),
        "USER_BANNED_IN_CHANNEL" => (
            400,
            "You're banned from sending messages in supergroups/channels.",
        ),
        "USER_IS_BLOCKED" => (403, "You were blocked by this user."),
        "USER_IS_BOT" => (400, "Bots can't send messages to other bots."),
        "VIDEO_CONTENT_TYPE_INVALID" => (400, "The video's content type is invalid."),
        "WEBPAGE_CURL_FAILED" => (400, "Failure while fetching the webpage with cURL."),
        "WEBPAGE_MEDIA_EMPTY" => (400, "Webpage media empty."),
        "YOU_BLOCKED_USER" => (400, "You blocked this user."),
        _ => (500, GENERIC_FAILURE_MESSAGE),
    };

    RemoteFailure { status, message }
}
