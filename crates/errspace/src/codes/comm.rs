//! Communication layer codes (1000–1999).
//!
//! Raised by the message layer when a connection, send, receive or
//! protocol handshake fails. `ERR_COMM_NO_CHANGE_IN_DATA` is not really a
//! failure: it is returned in response messages when the requested data
//! has not changed since the caller's timestamp.

error_codes! {
    table COMM_ENTRIES;

    ERR_COMM_UNEXPECTED_MSG = 1000 => "Unexpected message received",
    ERR_COMM_CONNECTION = 1001 => "Communication connection failure",
    ERR_COMM_SEND = 1002 => "Message send failure",
    ERR_COMM_RECEIVE = 1003 => "Message receive failure",
    ERR_COMM_SHUTDOWN = 1004 => "Communication shutdown failure",
    ERR_COMM_PROTOCOL_VERSION = 1005 => "Protocol version has changed, re-link your code",
    ERR_COMM_IO_STREAM_VERSION = 1006 => "I/O stream version number error",
    ERR_COMM_AUTHENTICATION = 1007 => "Protocol authentication error",

    ERR_COMM_NO_CHANGE_IN_DATA = 1900 => "Data has not changed since time specified",
}
