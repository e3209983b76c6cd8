use super::{PlaygroundSpec, Section};

pub const SECTIONS: &[Section] = &[
    Section::Text(
        "A type alias gives any type a name: object shapes, unions, tuples, \
         even primitives. Where an interface describes an extensible shape, \
         an alias is a fixed nickname.",
    ),
    Section::Heading("1. Aliases for objects and unions"),
    Section::Code(
        r#"type Point = {
  x: number;
  y: number;
};

type Status = "pending" | "active" | "done";
type Id = string | number;"#,
    ),
    Section::Playground(PlaygroundSpec {
        title: "Union types",
        default_code: r#"type Status = "pending" | "active" | "done";

function describe(status: Status): string {
  switch (status) {
    case "pending":
      return "Waiting to start";
    case "active":
      return "In progress";
    case "done":
      return "Finished";
  }
}

console.log(describe("active"));"#,
        solution: None,
        editor_rows: 14,
    }),
    Section::Heading("2. Literal types and narrowing"),
    Section::Text(
        "Unions of literals plus `typeof` checks give the compiler enough \
         information to narrow a value inside each branch.",
    ),
    Section::Code(
        r#"type Id = string | number;

function formatId(id: Id): string {
  if (typeof id === "string") {
    return id.toUpperCase(); // id is string here
  }
  return `#${id.toFixed(0)}`; // id is number here
}"#,
    ),
    Section::Heading("3. Interface vs. type alias"),
    Section::Text(
        "Interfaces can be reopened and merged; aliases cannot. Aliases can \
         name unions and tuples; interfaces cannot. Pick whichever reads \
         better — in application code they are mostly interchangeable.",
    ),
    Section::Heading("Exercises"),
    Section::Playground(PlaygroundSpec {
        title: "Exercises: type alias",
        default_code: r#"// TODO 1: declare a Temperature alias for number

// TODO 2: declare a Weekend alias for the strings "sat" | "sun"

// TODO 3: write isWeekend(day: string): boolean using the alias
// and print isWeekend("sat") and isWeekend("mon")
"#,
        solution: Some(
            r#"type Temperature = number;

type Weekend = "sat" | "sun";

function isWeekend(day: string): boolean {
  return day === "sat" || day === "sun";
}

const today: Temperature = 23.5;
console.log("temperature:", today);
console.log(isWeekend("sat"));
console.log(isWeekend("mon"));"#,
        ),
        editor_rows: 12,
    }),
];
