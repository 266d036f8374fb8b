/// Echoes the input message back exactly as received
pub fn echo_message(message: String) -> String {
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_is_identity() {
        assert_eq!(echo_message("hello".to_string()), "hello");
        assert_eq!(echo_message(String::new()), "");
        assert_eq!(echo_message("line\nbreak\t\u{0}".to_string()), "line\nbreak\t\u{0}");
    }

    #[test]
    fn test_echo_preserves_unicode() {
        let message = "🏷️ Activité: plage | 予算: 中".to_string();
        assert_eq!(echo_message(message.clone()), message);
    }
}
