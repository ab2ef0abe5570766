//! Structural and flow diagram families.

pub(super) const FLOWCHART: &str = r##"Generate a Mermaid flowchart that follows the user's instructions exactly.

FLOWCHART SYNTAX RULES:
1. Orientation: start with `flowchart TD` unless the user asks for another direction (TB, BT, RL, LR).
2. Node IDs: unique, alphanumeric (A, B1, Process1). Never use a lowercase `end` as an ID or label; write `End` or `END`.
3. IDs beginning with `o` or `x` directly after a link create circle or cross edges; capitalise them or put a space before them.
4. Node shapes:
   - Rectangle: id[Label]
   - Rounded: id(Label)
   - Stadium: id([Label])
   - Subroutine: id[[Label]]
   - Cylinder: id[(Label)]
   - Circle: id((Label))
   - Asymmetric: id>Label]
   - Rhombus (decision): id{Label}
   - Hexagon: id{{Label}}
   - Parallelogram: id[/Label/]
   - Trapezoid: id[/Label\]
   - Double circle: id(((Label)))
5. Links: `-->` solid arrow, `-.->` dotted arrow, `==>` thick arrow, `---` plain line. There is always a link between two nodes.
6. Link text: `A -->|Text| B`.
7. Labels containing special characters (#, &, <, >, parentheses) go in double quotes: `A["Process & Test"]`.
8. Group related nodes with `subgraph Title` ... `end`.
9. Styling is optional: `classDef name fill:#f9f,stroke:#333;` then `A:::name`.
10. Every flowchart has a clear start and a clear end unless the user says otherwise.

Worked example:
```mermaid
flowchart TD
    Start((Start))
    Validate{Is Valid?}
    Store[(Database)]
    Fail[Handle Error]
    Done((END))

    subgraph Intake
        Start --> Receive[Receive Request]
        Receive -->|Check| Validate
    end

    Validate -->|Yes| Transform[[Transform]]
    Validate -->|No| Fail
    Transform --> Store
    Store -.->|Notify| Done
    Fail ==> Done
```"##;

pub(super) const PROCESS_FLOW: &str = r##"Generate a flowchart that shows a business or technical process from its trigger to its outcome.

PROCESS FLOW RULES:
1. Start with `flowchart TD` (or `flowchart LR` for long linear processes).
2. Use a stadium shape for the trigger and the outcome: id([Label]).
3. Use rectangles for steps and rhombuses for decisions: id[Step], id{Question?}.
4. Label every branch leaving a decision: `D -->|Yes| E`.
5. Use a subgraph per actor or phase when the process spans several teams.
6. Every step must lead somewhere; no dangling nodes.

Worked example:
```mermaid
flowchart TD
    Submit([Order submitted]) --> Check{In stock?}
    Check -->|Yes| Pick[Pick items]
    Check -->|No| Backorder[Create backorder]
    Backorder --> Notify[Notify customer]
    Pick --> Pack[Pack parcel]
    Pack --> Ship[Hand to carrier]
    Ship --> Delivered([Order delivered])
    Notify --> Delivered
```"##;

pub(super) const SYSTEM: &str = r##"Generate a system diagram showing components, services, data stores and their interactions, drawn as a Mermaid flowchart.

SYSTEM DIAGRAM RULES:
1. Start with `flowchart LR`.
2. People and external actors: circles, id((User)).
3. Services: rectangles, id[Service Name]. Data stores: cylinders, id[(Database)]. Queues: id[/Queue/].
4. Group by tier or boundary with `subgraph Name` ... `end`.
5. Label every interaction with what flows across it: `API -->|REST| Orders`.
6. Use `<-->` only for genuinely bidirectional traffic.

Worked example:
```mermaid
flowchart LR
    User((User)) -->|HTTPS| LB[Load Balancer]

    subgraph Services
        LB -->|Forward| S1[Service A]
        LB -->|Forward| S2[Service B]
        S1 <-->|Internal| S2
    end

    subgraph Data
        DB1[(Primary DB)]
        DB2[(Replica DB)]
        DB1 -->|Sync| DB2
    end

    S1 -->|Read/Write| DB1
    S2 -->|Read| DB2
    S1 -->|Publish| Q[/Message Queue/]
    Q -->|Consume| W[Worker Service]
```"##;

pub(super) const BLOCK: &str = r##"Generate a Mermaid block diagram that shows the high-level structure of a system as a grid of blocks.

BLOCK DIAGRAM RULES:
1. Start with `block-beta`.
2. Set the number of columns with `columns N`.
3. Declare blocks by ID, optionally with a label: id["Label"]. Use `id:2` to span two columns.
4. Nest blocks with `block:groupId` ... `end`; a nested group can set its own `columns`.
5. Leave a gap with `space` (or `space:2`).
6. Connect blocks with `-->` or `---`; link text uses `A -- "text" --> B`.
7. Shapes follow flowchart syntax: id(("circle")), id[("database")], id{"decision"}.

Worked example:
```mermaid
block-beta
    columns 3
    Client["Client"] space Gateway["API Gateway"]
    space:3
    block:backend:3
        columns 2
        Auth["Auth Service"] Orders["Order Service"]
    end
    Store[("Database")]:3
    Client --> Gateway
    Gateway --> Auth
    Gateway --> Orders
    Orders --> Store
```"##;

pub(super) const SEQUENCE: &str = r##"Generate a Mermaid sequence diagram that follows the user's instructions exactly.

SEQUENCE DIAGRAM RULES:
1. Start with `sequenceDiagram`.
2. Declare participants with `participant ID as Name` (or `actor ID as Name` for people). IDs start with a letter and contain only letters, digits and underscores. Never use reserved words such as end, loop, alt as IDs.
3. Message arrows:
   - `->>` solid line with arrowhead (request)
   - `-->>` dotted line with arrowhead (reply)
   - `-)` asynchronous message
   - `-x` message that fails
4. Activations: `activate B` ... `deactivate B`, or the shorthand `A->>+B: msg` and `B-->>-A: reply`. Every activation has exactly one matching deactivation, and a participant is never deactivated while inactive.
5. An activation opened inside `loop`, `alt`, `opt` or `par` must be closed inside the same block.
6. Notes: `Note right of A: text`, `Note left of A: text`, `Note over A,B: text`.
7. Control blocks: `loop Label` ... `end`; `alt Case` ... `else Other` ... `end`; `opt Label` ... `end`. Close every block with `end`.
8. Use `autonumber` only when the user asks for numbered messages.
9. Put message text containing special characters in double quotes.
10. Do not add `rect`, `par` or styling unless the user asks for them.

Worked example:
```mermaid
sequenceDiagram
    participant A as Alice
    participant B as Bob
    participant C as Charlie

    A->>B: Hello Bob
    activate B
    B-->>A: Hi Alice
    deactivate B

    loop Every minute
        B->>C: Check status
        alt Status OK
            C-->>B: OK
        else Status Error
            C-->>B: Error
        end
    end

    Note right of B: Bob thinks
    B->>A: I have an idea
```"##;

pub(super) const CLASS: &str = r##"Generate a Mermaid class diagram that follows the user's instructions exactly.

CLASS DIAGRAM RULES:
1. Start with `classDiagram` on the first line.
2. Define classes with a body: `class Name { ... }`, one member per line.
3. Member visibility: `+` public, `-` private, `#` protected, `~` package.
4. Methods: `+calculate(int amount) bool` with a space between the closing parenthesis and the return type.
5. Relationships:
   - Inheritance: `Parent <|-- Child`
   - Composition: `Whole *-- Part`
   - Aggregation: `Whole o-- Part`
   - Association: `A --> B`
   - Dependency: `A ..> B`
   - Realization: `Interface ..|> Impl`
   Add a label after a colon: `Parent <|-- Child : extends`.
6. Generics use tildes: `Queue~T~`.
7. Annotations go inside the class body: `<<interface>>`, `<<abstract>>`, `<<enumeration>>`.
8. Cardinality goes in quotes beside the arrow: `Customer "1" --> "*" Order`.
9. Every class takes part in at least one relationship unless the user says otherwise.

Worked example:
```mermaid
classDiagram
    class Animal {
        <<abstract>>
        +int age
        +String gender
        +isMammal() bool
        +mate()
    }
    class Duck {
        +String beakColor
        +swim()
        +quack()
    }
    class Fish {
        -int sizeInFeet
        -canEat() bool
    }
    class Pond {
        +String name
    }
    Animal <|-- Duck
    Animal <|-- Fish
    Pond "1" o-- "*" Duck : hosts
```"##;

pub(super) const STATE: &str = r##"Generate a Mermaid state diagram that follows the user's instructions exactly.

STATE DIAGRAM RULES:
1. Start with `stateDiagram-v2`.
2. States are declared implicitly by transitions, or explicitly: `state "Long description" as S1` or `S1 : description`.
3. Transitions: `A --> B`, labelled `A --> B : event`.
4. Start and end: `[*] --> First` and `Last --> [*]`.
5. Composite states: `state Parent {` ... `}` with their own `[*]` start. Do not draw transitions between internal states of different composite states.
6. Choices: `state Check <<choice>>`, then transitions out of `Check` labelled with their conditions.
7. Forks and joins: `state Split <<fork>>` and `state Merge <<join>>`.
8. Concurrent regions inside a composite state are separated by a line containing only `--`.
9. Notes: `note right of S1` ... `end note`, or `note left of S1 : text`.
10. Direction: `direction LR` on its own line when the user wants a horizontal layout.

Worked example:
```mermaid
stateDiagram-v2
    direction LR
    [*] --> Idle
    Idle --> Processing : submit
    Processing --> Review : done
    state Review {
        [*] --> Automated
        Automated --> Manual
        --
        [*] --> Audit
    }
    state Decision <<choice>>
    Review --> Decision
    Decision --> Approved : passed
    Decision --> Rejected : failed
    Approved --> [*]
    Rejected --> Idle : resubmit
    note right of Idle
        Waiting for input
    end note
```"##;

pub(super) const ENTITY_RELATIONSHIP: &str = r##"Generate a Mermaid entity relationship diagram that follows the user's instructions exactly.

ER DIAGRAM RULES:
1. Start with `erDiagram`.
2. Entities: an uppercase singular noun, optionally with an attribute block:
   ENTITY {
       type name PK
       type name FK
       type name
   }
   Entity names start with a letter or underscore and may contain digits and hyphens.
3. Relationships use crow's foot cardinality on each side of the line:
   - `|o` zero or one, `||` exactly one, `}o` zero or more, `}|` one or more
   - `--` identifying (solid), `..` non-identifying (dashed)
   Example: `CUSTOMER ||--o{ ORDER : "places"`.
4. Every relationship has a label in double quotes.
5. Every entity used in a relationship is defined, and every defined entity takes part in a relationship.
6. Avoid reserved words and special characters in entity and attribute names.

Worked example:
```mermaid
erDiagram
    CUSTOMER {
        int customer_id PK
        string name
        string email
    }
    ORDER {
        int order_id PK
        date order_date
        int customer_id FK
    }
    PRODUCT {
        int product_id PK
        string title
        float price
    }
    ORDER_ITEM {
        int order_id FK
        int product_id FK
        int quantity
    }
    CUSTOMER ||--o{ ORDER : "places"
    ORDER ||--|{ ORDER_ITEM : "contains"
    PRODUCT ||--o{ ORDER_ITEM : "appears in"
```"##;

pub(super) const EERD: &str = r##"Generate an enhanced entity relationship diagram (EERD) using Mermaid `erDiagram` syntax. Model specialisation and generalisation as explicit relationships because Mermaid has no dedicated EER notation.

EERD RULES:
1. Start with `erDiagram`.
2. Give every entity an attribute block with its key marked `PK` and foreign keys marked `FK`.
3. Model a subtype as its own entity that shares the supertype key as `PK, FK`.
4. Connect supertype and subtype with an exactly-one to zero-or-one relationship labelled "is a": `PERSON ||--o| STUDENT : "is a"`.
5. Use crow's foot cardinality for ordinary relationships and label each one in double quotes.
6. Keep entity names uppercase and singular.

Worked example:
```mermaid
erDiagram
    PERSON {
        int person_id PK
        string name
        date birth_date
    }
    STUDENT {
        int person_id PK, FK
        string student_number
    }
    EMPLOYEE {
        int person_id PK, FK
        float salary
    }
    COURSE {
        int course_id PK
        string title
    }
    PERSON ||--o| STUDENT : "is a"
    PERSON ||--o| EMPLOYEE : "is a"
    STUDENT }o--o{ COURSE : "enrolls in"
    EMPLOYEE ||--o{ COURSE : "teaches"
```"##;

pub(super) const REQUIREMENT: &str = r##"Generate a Mermaid requirement diagram showing requirements, the elements that implement or verify them, and how they relate.

REQUIREMENT DIAGRAM RULES:
1. Start with `requirementDiagram` (case sensitive).
2. Requirements:
   <type> name {
       id: identifier
       text: description
       risk: low | medium | high
       verifymethod: analysis | inspection | test | demonstration
   }
   Types (case sensitive): requirement, functionalRequirement, interfaceRequirement, performanceRequirement, physicalRequirement, designConstraint.
3. Elements:
   element name {
       type: element type
       docRef: reference
   }
4. Relationships: `source - <kind> -> destination`, where kind is one of contains, copies, derives, satisfies, verifies, refines, traces.
5. Names contain only letters, digits and underscores. Quote text values that contain special characters.

Worked example:
```mermaid
requirementDiagram

    requirement login_req {
        id: 1
        text: Users can sign in with email and password.
        risk: high
        verifymethod: test
    }

    functionalRequirement lockout_req {
        id: 1.1
        text: Lock the account after five failed attempts.
        risk: medium
        verifymethod: inspection
    }

    performanceRequirement latency_req {
        id: 1.2
        text: Sign in completes within one second.
        risk: low
        verifymethod: demonstration
    }

    element auth_service {
        type: service
        docRef: docs/auth
    }

    element auth_tests {
        type: "test suite"
        docRef: tests/auth
    }

    login_req - contains -> lockout_req
    login_req - derives -> latency_req
    auth_service - satisfies -> login_req
    auth_tests - verifies -> lockout_req
```"##;

pub(super) const C4: &str = r##"Generate a Mermaid C4 diagram describing the structure of a software system.

C4 DIAGRAM RULES:
1. Start with `C4Context` for system context diagrams, `C4Container` for containers, `C4Component` for components, `C4Dynamic` for runtime flows or `C4Deployment` for deployment views.
2. Add a title: `title Name of the view`.
3. Elements:
   - Person(id, "name", "description") and Person_Ext(...)
   - System(id, "name", "description"), System_Ext(...), SystemDb(...), SystemQueue(...)
   - Container(id, "name", "technology", "description"), ContainerDb(...)
   - Component(id, "name", "technology", "description")
4. Boundaries wrap elements in braces: Enterprise_Boundary(id, "name") { ... }, System_Boundary(id, "name") { ... }, Boundary(id, "name", "type") { ... }.
5. Relationships: Rel(from, to, "label"), Rel(from, to, "label", "technology"), BiRel(from, to, "label"), Rel_Back(from, to, "label").
6. Optional styling: UpdateElementStyle(id, $bgColor="grey"), UpdateRelStyle(from, to, $textColor="blue", $offsetY="-10"), UpdateLayoutConfig($c4ShapeInRow="3", $c4BoundaryInRow="1").
7. Every id is unique and every element takes part in at least one relationship.

Worked example:
```mermaid
C4Context
    title System Context diagram for Internet Banking System
    Person(customer, "Banking Customer", "A customer of the bank with personal accounts.")
    Enterprise_Boundary(bank, "Bank") {
        System(banking, "Internet Banking System", "Lets customers view balances and make payments.")
        SystemDb_Ext(mainframe, "Mainframe Banking System", "Stores core banking information.")
        System_Ext(mail, "E-mail System", "The internal Exchange e-mail system.")
    }
    Rel(customer, banking, "Uses")
    Rel(banking, mainframe, "Reads and writes", "XML/HTTPS")
    Rel(banking, mail, "Sends e-mail", "SMTP")
    Rel(mail, customer, "Sends e-mails to")
    UpdateRelStyle(customer, banking, $textColor="blue", $lineColor="blue", $offsetX="5")
    UpdateLayoutConfig($c4ShapeInRow="3", $c4BoundaryInRow="1")
```"##;
