//! Chart, timeline and journey families.

pub(super) const PIE: &str = r##"Generate a Mermaid pie chart showing how a whole is distributed.

PIE CHART RULES:
1. Start with `pie`. Add `showData` on the same line only when the user wants raw values displayed.
2. Add a title on its own line: `title Your Title`.
3. One slice per line: `"Label" : value`.
4. Labels are always in double quotes.
5. Values are positive numbers, integers or decimals. They do not need to sum to 100.

Worked example:
```mermaid
pie
    title Distribution of Customer Types
    "Enterprise" : 45.2
    "Small Business" : 30.8
    "Consumer" : 24.0
```"##;

pub(super) const QUADRANT: &str = r##"Generate a Mermaid quadrant chart that places items into four sections along two axes.

QUADRANT CHART RULES:
1. Start with `quadrantChart`.
2. Add a title: `title Your Title`.
3. Axes: `x-axis Left Label --> Right Label` and `y-axis Bottom Label --> Top Label`.
4. Quadrant names:
   - quadrant-1 top right
   - quadrant-2 top left
   - quadrant-3 bottom left
   - quadrant-4 bottom right
5. Points: `Point Name: [x, y]` with both coordinates between 0 and 1; (0, 0) is bottom left.

Worked example:
```mermaid
quadrantChart
    title Product Portfolio Analysis
    x-axis Low Market Share --> High Market Share
    y-axis Low Growth Rate --> High Growth Rate
    quadrant-1 Stars
    quadrant-2 Question Marks
    quadrant-3 Dogs
    quadrant-4 Cash Cows
    Product A: [0.7, 0.8]
    Product B: [0.45, 0.23]
    Product C: [0.57, 0.69]
    Product D: [0.78, 0.34]
```"##;

pub(super) const XY_CHART: &str = r##"Generate a Mermaid XY chart plotting one or more series on a two-dimensional grid.

XY CHART RULES:
1. Start with `xychart-beta` (add `horizontal` on the same line for a horizontal chart).
2. Title in quotes: `title "Your Title"`.
3. X axis, either categorical `x-axis [Jan, Feb, Mar]` or numeric `x-axis "Label" 0 --> 100`.
4. Y axis: `y-axis "Label" min --> max`.
5. Series: `bar [v1, v2, ...]` and/or `line [v1, v2, ...]`. Several series may be combined.
6. Every series has exactly as many values as the categorical x axis has entries.

Worked example:
```mermaid
xychart-beta
    title "Monthly Sales Performance"
    x-axis [Jan, Feb, Mar, Apr, May, Jun]
    y-axis "Revenue (k)" 0 --> 100
    bar [25, 35, 45, 55, 65, 75]
    line [20, 30, 40, 50, 60, 70]
```"##;

pub(super) const TIMELINE: &str = r##"Generate a Mermaid timeline showing events in chronological order.

TIMELINE RULES:
1. Start with `timeline`.
2. Add a title: `title Your Title`.
3. Each time period is a line `period : event`.
4. Further events for the same period go on following lines starting with `: event`, indented under the period.
5. Group periods with `section Name` when the user describes phases or eras.
6. Periods render in the order they appear; list them chronologically.

Worked example:
```mermaid
timeline
    title Project Timeline
    section Discovery
        2024-01 : Kickoff
                : Team formed
        2024-02 : Requirements signed off
    section Delivery
        2024-04 : Alpha release
        2024-05 : Beta testing
                : Security review
        2024-06 : Version 1.0
```"##;

pub(super) const MINDMAP: &str = r##"Generate a Mermaid mindmap showing hierarchical ideas around a central topic.

MINDMAP RULES:
1. Start with `mindmap`.
2. Exactly one root node, for example `root((Central Topic))`.
3. Hierarchy is expressed only by indentation; children are indented deeper than their parent and siblings share the same indentation.
4. Node shapes: plain text, [square], (rounded), ((circle)), ))bang((, )cloud(, {{hexagon}}.
5. Keep labels short; avoid parentheses and brackets inside labels unless they define a shape.

Worked example:
```mermaid
mindmap
    root((Project Plan))
        Planning
            Requirements
            Timeline
        Development
            Frontend
                UI Design
            Backend
                API Design
                Database
        Testing
            Unit Tests
            User Acceptance
        Deployment
            Staging
            Production
```"##;

pub(super) const SANKEY: &str = r##"Generate a Mermaid Sankey diagram showing quantities flowing between nodes.

SANKEY DIAGRAM RULES:
1. Start with `sankey-beta`.
2. Every following line is a CSV row with exactly three columns: source,target,value.
3. No spaces around the commas.
4. Wrap a node name in double quotes when it contains a comma; write a literal double quote as two double quotes.
5. The value sets the width of the flow and must be a positive number.
6. Every node appears as a source or a target in at least one row; no isolated nodes.
7. Blank lines are allowed between groups of rows.

Worked example:
```mermaid
sankey-beta
Energy Production,Electricity Grid,500
Electricity Grid,Residential Use,150
Electricity Grid,Commercial Use,200
Electricity Grid,Industrial Use,100
Electricity Grid,Losses,50
Residential Use,Heating,80
Residential Use,Lighting,70
Commercial Use,Lighting,100
Commercial Use,HVAC,100
Industrial Use,Machinery,100
```"##;

pub(super) const GANTT: &str = r##"Generate a Mermaid Gantt chart that schedules the tasks the user describes.

GANTT CHART RULES:
1. Start with `gantt`.
2. Optional title: `title Your Title`.
3. Input date format: `dateFormat YYYY-MM-DD` (use HH:mm components when the user works in hours).
4. Optional axis format: `axisFormat %b %d`.
5. Optional exclusions: `excludes weekends` or specific dates.
6. Group tasks with `section Name`.
7. Task syntax: `Task name :[tags,] [id,] start, end-or-duration`
   - tags: crit, done, active, milestone
   - start: a date in the declared format, or `after id` (several ids allowed)
   - end: a date, a duration such as `3d` or `2w`, or `until id`
8. Milestones use the `milestone` tag with a `0d` duration.
9. Task ids are unique and every `after` refers to an id defined earlier.

Worked example:
```mermaid
gantt
    title Project Development Timeline
    dateFormat YYYY-MM-DD
    axisFormat %b %d
    excludes weekends
    section Planning
    Define scope          :done, p1, 2025-01-06, 5d
    Identify stakeholders :done, p2, after p1, 2d
    section Development
    Design                :crit, d1, after p2, 7d
    Implementation        :active, d2, after d1, 14d
    Testing               :d3, after d2, 7d
    section Release
    Deployment prep       :r1, after d3, 3d
    Go live               :milestone, r2, after r1, 0d
```"##;

pub(super) const GITGRAPH: &str = r##"Generate a Mermaid gitgraph showing commits, branches and merges.

GITGRAPH RULES:
1. Start with `gitGraph`. The current branch starts as `main`.
2. `commit` adds a commit to the current branch. Optional attributes: `id: "custom id"`, `tag: "v1.0"`, `type: NORMAL | REVERSE | HIGHLIGHT`.
3. `branch name` creates a branch and switches to it. Branch names are unique.
4. `checkout name` switches to an existing branch; the branch must already exist.
5. `merge name` merges the named branch into the current one. Both branches need at least one commit of their own since they diverged.
6. `cherry-pick id: "commit id"` copies a commit from another branch; the id must exist, must not be on the current branch, and the current branch must already have a commit.
7. Commit ids are unique across the whole graph.

Worked example:
```mermaid
gitGraph
    commit id: "Initial commit" tag: "v1.0"
    branch develop
    commit id: "Feature A" type: HIGHLIGHT
    commit id: "Feature B"
    checkout main
    commit id: "Hotfix" type: REVERSE
    merge develop
    branch feature
    commit id: "Work in progress"
    checkout develop
    commit id: "Bugfix"
    checkout feature
    cherry-pick id: "Bugfix"
    checkout main
    merge feature tag: "v1.1"
```"##;

pub(super) const USER_JOURNEY: &str = r##"Generate a Mermaid user journey diagram describing the steps a user takes and how satisfied they are at each step.

USER JOURNEY RULES:
1. Start with `journey`.
2. Title: `title Journey Name`.
3. Split the journey into phases with `section Phase Name`.
4. Tasks inside a section: `Task name: score: Actor1, Actor2`.
   - score is an integer from 1 (very unhappy) to 5 (very happy)
   - actors are a comma-separated list
5. Task names must not contain colons.
6. Order sections and tasks as they happen.

Worked example:
```mermaid
journey
    title E-Commerce Purchase Journey
    section Discover
        Browse products: 4: Shopper
        View product details: 5: Shopper
        Add to cart: 4: Shopper
    section Checkout
        Enter shipping details: 2: Shopper
        Pay for order: 3: Shopper, Payment Gateway
    section After purchase
        Receive confirmation: 5: Shopper
        Track shipment: 4: Shopper, Courier
        Leave review: 4: Shopper
```"##;
