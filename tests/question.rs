use test_utils::prelude::*;

mod list {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn first_page() {
        let app = get_cached_app().await;
        app.reset_database().await;

        let res = app.get("/questions").send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total_questions"], 19);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["categories"].as_object().unwrap().len(), 6);
        assert_eq!(body["current_category"], Value::Null);
        assert_json_eq!(
            body["questions"][0],
            json!({
                "id": 1,
                "question": "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
                "answer": "Maya Angelou",
                "category": 4,
                "difficulty": 2,
            })
        );
    }

    #[tokio::test]
    #[serial]
    async fn last_page() {
        let app = get_cached_app().await;
        app.reset_database().await;

        let res = app.get("/questions?page=2").send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 9);
        assert_eq!(questions[0]["id"], 11);
        assert_eq!(body["total_questions"], 19);
    }

    #[tokio::test]
    #[parallel]
    async fn page_out_of_range() {
        let app = get_cached_app().await;

        let res = app.get("/questions?page=20").send().await;

        assert_error!(res, error::PAGE_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn page_far_out_of_range() {
        let app = get_cached_app().await;

        let res = app
            .get(&format!("/questions?page={}", i64::MAX))
            .send()
            .await;

        assert_error!(res, error::PAGE_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn page_zero() {
        let app = get_cached_app().await;

        let res = app.get("/questions?page=0").send().await;

        assert_error!(res, error::PAGE_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn page_not_a_number() {
        let app = get_cached_app().await;

        let res = app.get("/questions?page=two").send().await;

        assert_error!(res, error::INVALID_QUERY);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn success() {
        let app = get_cached_app().await;
        let id = app.create_question(3).await;

        let res = app.delete(&format!("/questions/{id}")).send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["success"], true);
        assert_eq!(body["deleted"], id);
        assert!(body["total_questions"].is_u64());

        let res = app.delete(&format!("/questions/{id}")).send().await;

        assert_error!(res, error::QUESTION_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn no_such_question() {
        let app = get_cached_app().await;

        let res = app.delete("/questions/1000").send().await;

        assert_error!(res, error::QUESTION_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn id_out_of_range() {
        let app = get_cached_app().await;

        let res = app.delete("/questions/3000000000").send().await;

        assert_error!(res, error::QUESTION_NOT_FOUND);
    }

    #[tokio::test]
    #[parallel]
    async fn not_a_number() {
        let app = get_cached_app().await;

        let res = app.delete("/questions/ten").send().await;

        assert_error!(res, error::RESOURCE_NOT_FOUND);
    }
}

mod create {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn success() {
        let app = get_cached_app().await;
        let text = format!("This is question {}?", uuid());

        let res = app
            .post("/submit")
            .json(&json!({
                "question": text,
                "answer": "this is answer.",
                "difficulty": 3,
                "category": 3,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["success"], true);
        let id = body["created"].as_i64().unwrap();

        let res = app
            .post("/questions")
            .json(&json!({ "searchTerm": text }))
            .send()
            .await;

        let body: Value = res.json().await;
        assert_json_eq!(
            body["questions"],
            json!([{
                "id": id,
                "question": text,
                "answer": "this is answer.",
                "category": 3,
                "difficulty": 3,
            }])
        );
    }

    #[tokio::test]
    #[parallel]
    async fn missing_fields() {
        let app = get_cached_app().await;

        let res = app
            .post("/submit")
            .json(&json!({
                "question": "Where is the answer?",
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_MISSING_FIELDS);
    }

    #[tokio::test]
    #[parallel]
    async fn difficulty_out_of_range() {
        let app = get_cached_app().await;

        let res = app
            .post("/submit")
            .json(&json!({
                "question": "How hard is this?",
                "answer": "Very",
                "difficulty": 9,
                "category": 3,
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    #[parallel]
    async fn empty_question() {
        let app = get_cached_app().await;

        let res = app
            .post("/submit")
            .json(&json!({
                "question": "",
                "answer": "Nothing",
                "difficulty": 1,
                "category": 3,
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    #[parallel]
    async fn unknown_category() {
        let app = get_cached_app().await;

        let res = app
            .post("/submit")
            .json(&json!({
                "question": "Which category is this?",
                "answer": "None",
                "difficulty": 1,
                "category": 999,
            }))
            .send()
            .await;

        assert_error!(res, error::UNKNOWN_CATEGORY);
    }

    #[tokio::test]
    #[parallel]
    async fn syntax_error() {
        let app = get_cached_app().await;

        let res = app
            .post("/submit")
            .header(header::CONTENT_TYPE, "application/json")
            .body("{\"question\": ")
            .send()
            .await;

        assert_error!(res, error::JSON_SYNTAX_ERROR);
    }

    #[tokio::test]
    #[parallel]
    async fn missing_content_type() {
        let app = get_cached_app().await;

        let res = app.post("/submit").body("{}").send().await;

        assert_error!(res, error::JSON_CONTENT_TYPE);
    }
}

mod search {
    use super::*;

    #[tokio::test]
    #[parallel]
    async fn no_results() {
        let app = get_cached_app().await;

        let res = app
            .post("/questions")
            .json(&json!({ "searchTerm": "NoBook" }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_json_eq!(
            body,
            json!({
                "success": true,
                "questions": [],
                "total_questions": 0,
                "current_category": null,
            })
        );
    }

    #[tokio::test]
    #[parallel]
    async fn case_insensitive() {
        let app = get_cached_app().await;

        let res = app
            .post("/questions")
            .json(&json!({ "searchTerm": "TIM BURTON" }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["total_questions"], 1);
        assert_eq!(body["questions"][0]["answer"], "Edward Scissorhands");
    }

    #[tokio::test]
    #[parallel]
    async fn non_ascii_text() {
        let app = get_cached_app().await;
        let question = format!("Où se trouve Éclair {}?", uuid());

        let res = app
            .post("/submit")
            .json(&json!({
                "question": question,
                "answer": "Paris",
                "difficulty": 1,
                "category": 3,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let res = app
            .post("/questions")
            .json(&json!({ "searchTerm": question }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_eq!(body["total_questions"], 1);
        assert_eq!(body["questions"][0]["question"], question);
    }

    #[tokio::test]
    #[parallel]
    async fn wildcards_are_literal() {
        let app = get_cached_app().await;

        let res = app
            .post("/questions")
            .json(&json!({ "searchTerm": "%_%" }))
            .send()
            .await;

        let body: Value = res.json().await;
        assert_eq!(body["total_questions"], 0);
    }

    #[tokio::test]
    #[parallel]
    async fn missing_search_term() {
        let app = get_cached_app().await;

        let res = app.post("/questions").json(&json!({})).send().await;

        assert_error!(res, error::JSON_MISSING_FIELDS);
    }
}
