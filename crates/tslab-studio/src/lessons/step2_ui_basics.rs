use super::{PlaygroundSpec, Section};

pub const SECTIONS: &[Section] = &[
    Section::Text(
        "Typed props and state are the payoff of using TypeScript with a \
         component framework: a component's contract becomes a checked \
         interface. The framework listings below are read-only; the runnable \
         snippet practices the prop-shape thinking in plain TypeScript.",
    ),
    Section::Heading("1. Typing component props"),
    Section::Code(
        r#"interface GreetingProps {
  name: string;
  emphasized?: boolean;
}

function Greeting({ name, emphasized = false }: GreetingProps) {
  const text = `Hello, ${name}!`;
  return <p>{emphasized ? <strong>{text}</strong> : text}</p>;
}"#,
    ),
    Section::Heading("2. Typing state"),
    Section::Code(
        r#"const [count, setCount] = useState<number>(0);
const [user, setUser] = useState<User | null>(null);"#,
    ),
    Section::Text(
        "The explicit type argument matters most when the initial value does \
         not pin the type down — `null` above would otherwise infer `null` \
         forever.",
    ),
    Section::Heading("3. Typing event handlers"),
    Section::Code(
        r#"function SearchBox() {
  const [query, setQuery] = useState<string>("");

  const onChange = (e: React.ChangeEvent<HTMLInputElement>) => {
    setQuery(e.target.value);
  };

  return <input value={query} onChange={onChange} />;
}"#,
    ),
    Section::Heading("Practice: a props contract in plain TypeScript"),
    Section::Playground(PlaygroundSpec {
        title: "Props as interfaces",
        default_code: r#"interface ButtonProps {
  label: string;
  disabled?: boolean;
  onClick: () => void;
}

function describeButton(props: ButtonProps): string {
  const state = props.disabled ? "disabled" : "enabled";
  return `[${props.label}] (${state})`;
}

let clicks = 0;
const save: ButtonProps = {
  label: "Save",
  onClick: () => {
    clicks += 1;
  },
};

console.log(describeButton(save));
save.onClick();
save.onClick();
console.log("clicked", clicks, "times");"#,
        solution: None,
        editor_rows: 18,
    }),
];
