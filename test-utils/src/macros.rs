#[macro_export]
macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        assert_eq!($res.status(), $error.status());

        let res_json: serde_json::Value = $res.json().await;
        assert_eq!(res_json["success"], false);
        assert_eq!(res_json["error"], $error.status().as_u16());
        assert_eq!(res_json["code"], $error.code());
        assert_eq!(res_json["message"], $error.message());
    }};
}
