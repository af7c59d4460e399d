use super::const_error;

const_error! {
    #[error("T0000", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const INTERNAL;
}

const_error! {
    #[error("T0001", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const DATABASE_ERROR;
}

const_error! {
    #[error("T0002", "unprocessable entity")]
    #[status(UNPROCESSABLE_ENTITY)]
    const JSON_MISSING_FIELDS;
}

const_error! {
    #[error("T0003", "bad request")]
    #[status(BAD_REQUEST)]
    const JSON_SYNTAX_ERROR;
}

const_error! {
    #[error("T0004", "bad request")]
    #[status(BAD_REQUEST)]
    const JSON_CONTENT_TYPE;
}

const_error! {
    #[error("T0005", "unprocessable entity")]
    #[status(UNPROCESSABLE_ENTITY)]
    const JSON_VALIDATE_INVALID;
}

const_error! {
    #[error("T0006", "bad request")]
    #[status(BAD_REQUEST)]
    const INVALID_QUERY;
}

const_error! {
    #[error("T0007", "resource not found")]
    #[status(NOT_FOUND)]
    const RESOURCE_NOT_FOUND;
}

const_error! {
    #[error("T0008", "method not allowed")]
    #[status(METHOD_NOT_ALLOWED)]
    const METHOD_NOT_ALLOWED;
}

const_error! {
    #[error("T0009", "resource not found")]
    #[status(NOT_FOUND)]
    const PAGE_NOT_FOUND;
}

const_error! {
    #[error("T0010", "resource not found")]
    #[status(NOT_FOUND)]
    const CATEGORY_NOT_FOUND;
}

const_error! {
    #[error("T0011", "unprocessable entity")]
    #[status(UNPROCESSABLE_ENTITY)]
    const QUESTION_NOT_FOUND;
}

const_error! {
    #[error("T0012", "unprocessable entity")]
    #[status(UNPROCESSABLE_ENTITY)]
    const UNKNOWN_CATEGORY;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let errors = [
            INTERNAL,
            DATABASE_ERROR,
            JSON_MISSING_FIELDS,
            JSON_SYNTAX_ERROR,
            JSON_CONTENT_TYPE,
            JSON_VALIDATE_INVALID,
            INVALID_QUERY,
            RESOURCE_NOT_FOUND,
            METHOD_NOT_ALLOWED,
            PAGE_NOT_FOUND,
            CATEGORY_NOT_FOUND,
            QUESTION_NOT_FOUND,
            UNKNOWN_CATEGORY,
        ];

        let codes: HashSet<_> = errors.iter().map(|error| error.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }
}
