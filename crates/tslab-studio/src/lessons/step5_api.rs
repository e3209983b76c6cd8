use super::{PlaygroundSpec, Section};

pub const SECTIONS: &[Section] = &[
    Section::Text(
        "Second mini-project: typing data that crosses a boundary. API \
         responses arrive untyped; interfaces plus narrow helper functions \
         turn them back into checked values.",
    ),
    Section::Heading("1. Modelling a response"),
    Section::Code(
        r#"interface ApiUser {
  id: number;
  name: string;
  email: string;
}

interface ApiResponse<T> {
  ok: boolean;
  data?: T;
  error?: string;
}"#,
    ),
    Section::Heading("2. A typed fetch wrapper"),
    Section::Code(
        r#"async function fetchUser(id: number): Promise<ApiResponse<ApiUser>> {
  const res = await fetch(`/api/users/${id}`);
  if (!res.ok) {
    return { ok: false, error: `HTTP ${res.status}` };
  }
  const data = (await res.json()) as ApiUser;
  return { ok: true, data };
}"#,
    ),
    Section::Text(
        "The `as` assertion is the trust boundary: everything after it is \
         checked. Keep assertions in one place and the rest of the program \
         stays honest.",
    ),
    Section::Heading("3. Handling both arms of the result"),
    Section::Playground(PlaygroundSpec {
        title: "Response handling",
        default_code: r#"interface ApiResponse<T> {
  ok: boolean;
  data?: T;
  error?: string;
}

function describe(response: ApiResponse<{ name: string }>): string {
  if (response.ok && response.data) {
    return `loaded ${response.data.name}`;
  }
  return `failed: ${response.error ?? "unknown error"}`;
}

console.log(describe({ ok: true, data: { name: "Hong Gildong" } }));
console.log(describe({ ok: false, error: "HTTP 404" }));"#,
        solution: None,
        editor_rows: 16,
    }),
    Section::Heading("Exercise: parsing with a guard"),
    Section::Playground(PlaygroundSpec {
        title: "Exercises: type guard",
        default_code: r#"// TODO: implement isUser so parse returns a typed value or null

interface User {
  id: number;
  name: string;
}

function isUser(value: unknown): value is User {
  // write your code here
  return false;
}

function parse(json: string): User | null {
  const value: unknown = JSON.parse(json);
  return isUser(value) ? value : null;
}

console.log(parse('{"id": 1, "name": "Kim"}'));
console.log(parse('{"nope": true}'));"#,
        solution: Some(
            r#"interface User {
  id: number;
  name: string;
}

function isUser(value: unknown): value is User {
  if (typeof value !== "object" || value === null) {
    return false;
  }
  const candidate = value as { id?: unknown; name?: unknown };
  return typeof candidate.id === "number" && typeof candidate.name === "string";
}

function parse(json: string): User | null {
  const value: unknown = JSON.parse(json);
  return isUser(value) ? value : null;
}

console.log(parse('{"id": 1, "name": "Kim"}'));
console.log(parse('{"nope": true}'));"#,
        ),
        editor_rows: 18,
    }),
];
