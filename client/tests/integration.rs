//! Full lifecycle test against the live server.
//!
//! # Design
//! Starts the real server (seed data included) on a random port, then
//! exercises every client operation over real HTTP using ureq as the host
//! transport. This is the test that catches schema drift between the client
//! DTOs and the server's envelopes.

use todo_client::{ApiError, CreateTodo, HttpMethod, HttpResponse, TodoClient, UpdateTodo};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses come
/// back as data and the client's status interpretation is what gets tested.
fn execute(req: todo_client::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

/// Boot the seeded server on an OS-assigned port and return a client bound
/// to it.
fn start_server() -> TodoClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    TodoClient::new(&format!("http://{addr}"))
}

#[test]
fn lifecycle_against_seeded_server() {
    let client = start_server();

    // Step 1: health. The probe answers before any todo traffic.
    let req = client.build_health();
    let health = client.parse_health(execute(req)).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "todo-server");
    assert!(!health.version.is_empty());

    // Step 2: list. The three seed records, in insertion order.
    let req = client.build_list_todos();
    let list = client.parse_list_todos(execute(req)).unwrap();
    assert!(list.success);
    assert_eq!(list.count, 3);
    assert_eq!(list.todos.len(), 3);
    assert_eq!(list.todos[0].text, "Set up Jenkins pipeline");
    assert!(list.todos[0].completed);
    let seeded_max_id = list.todos.iter().map(|t| t.id).max().unwrap();

    // Step 3: create. Fresh id above every seed, trimmed text.
    let create_input = CreateTodo {
        text: "  Ship the release  ".to_string(),
    };
    let req = client.build_create_todo(&create_input).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.text, "Ship the release");
    assert!(!created.completed);
    assert!(created.id > seeded_max_id);
    let id = created.id;

    // Step 4: blank text is rejected with the server's fixed reason, and
    // nothing was stored.
    let bad_input = CreateTodo {
        text: "   ".to_string(),
    };
    let req = client.build_create_todo(&bad_input).unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    match err {
        ApiError::InvalidInput(reason) => assert_eq!(reason, "Todo text is required"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    let req = client.build_list_todos();
    assert_eq!(client.parse_list_todos(execute(req)).unwrap().count, 4);

    // Step 5: get the created todo.
    let req = client.build_get_todo(id);
    let fetched = client.parse_get_todo(execute(req)).unwrap();
    assert_eq!(fetched, created);

    // Step 6: update completed only.
    let update_input = UpdateTodo {
        completed: Some(true),
        ..UpdateTodo::default()
    };
    let req = client.build_update_todo(id, &update_input).unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap();
    assert_eq!(updated.text, "Ship the release"); // unchanged
    assert!(updated.completed);

    // Step 7: update text only.
    let update_input = UpdateTodo {
        text: Some("Ship the hotfix".to_string()),
        ..UpdateTodo::default()
    };
    let req = client.build_update_todo(id, &update_input).unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap();
    assert_eq!(updated.text, "Ship the hotfix");
    assert!(updated.completed); // unchanged from previous update

    // Step 8: delete, then every addressed operation answers NotFound.
    let req = client.build_delete_todo(id);
    client.parse_delete_todo(execute(req)).unwrap();

    let req = client.build_get_todo(id);
    assert!(matches!(
        client.parse_get_todo(execute(req)).unwrap_err(),
        ApiError::NotFound
    ));
    let req = client.build_delete_todo(id);
    assert!(matches!(
        client.parse_delete_todo(execute(req)).unwrap_err(),
        ApiError::NotFound
    ));

    // Step 9: clear everything; the id generator rewinds to 1.
    let req = client.build_delete_all_todos();
    client.parse_delete_all_todos(execute(req)).unwrap();

    let req = client.build_list_todos();
    let list = client.parse_list_todos(execute(req)).unwrap();
    assert_eq!(list.count, 0);
    assert!(list.todos.is_empty());

    let req = client
        .build_create_todo(&CreateTodo {
            text: "First again".to_string(),
        })
        .unwrap();
    let first = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(first.id, 1);
}
